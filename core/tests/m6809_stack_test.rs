use mc6809_core::cpu::M6809;
mod common;
use common::{TestBus, step};

#[test]
fn test_pshs_puls_round_trip() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(
        0,
        &[
            0x34, 0x16, // PSHS X,B,A
            0x4F, // CLRA
            0x5F, // CLRB
            0x8E, 0x00, 0x00, // LDX #0
            0x35, 0x16, // PULS A,B,X
        ],
    );
    cpu.s.set(0x0200);
    cpu.a.set(0x11);
    cpu.b.set(0x22);
    cpu.x.set(0x3344);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.s.value(), 0x01FC);
    assert_eq!(bus.memory[0x01FC], 0x11, "A on top");
    assert_eq!(bus.memory[0x01FD], 0x22, "then B");
    assert_eq!(bus.word(0x01FE), 0x3344, "then X");

    step(&mut cpu, &mut bus, 4);
    assert_eq!(cpu.s.value(), 0x0200);
    assert_eq!(cpu.a.value(), 0x11);
    assert_eq!(cpu.b.value(), 0x22);
    assert_eq!(cpu.x.value(), 0x3344);
}

#[test]
fn test_pshs_everything() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0x0100, &[0x34, 0xFF]); // PSHS PC,U,Y,X,DP,B,A,CC
    cpu.pc.set(0x0100);
    cpu.s.set(0x1000);
    cpu.u.set(0xAAAA);
    cpu.y.set(0xBBBB);
    cpu.x.set(0xCCCC);
    cpu.dp.set(0xDD);
    cpu.a.set(0x01);
    cpu.b.set(0x02);
    cpu.cc.set(0x0F);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.s.value(), 0x1000 - 12);
    let s = cpu.s.value();
    assert_eq!(bus.memory[s as usize], 0x0F, "CC");
    assert_eq!(bus.memory[s as usize + 1], 0x01, "A");
    assert_eq!(bus.memory[s as usize + 2], 0x02, "B");
    assert_eq!(bus.memory[s as usize + 3], 0xDD, "DP");
    assert_eq!(bus.word(s + 4), 0xCCCC, "X");
    assert_eq!(bus.word(s + 6), 0xBBBB, "Y");
    assert_eq!(bus.word(s + 8), 0xAAAA, "U");
    assert_eq!(bus.word(s + 10), 0x0102, "PC after the instruction");
    assert_eq!(cpu.cycles, 5, "no per-byte stacking cycles");
}

#[test]
fn test_pshu_uses_s_slot() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(
        0,
        &[
            0x36, 0x40, // PSHU S
            0x37, 0x10, // PULU X
        ],
    );
    cpu.u.set(0x3000);
    cpu.s.set(0x7123);
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.u.value(), 0x2FFE);
    assert_eq!(bus.word(0x2FFE), 0x7123);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.x.value(), 0x7123);
    assert_eq!(cpu.u.value(), 0x3000);
}

#[test]
fn test_puls_pc_is_a_return() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(0, &[0x35, 0x80]); // PULS PC
    bus.set_vector(0x0500, 0x4321);
    cpu.s.set(0x0500);
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.pc.value(), 0x4321);
    assert_eq!(cpu.s.value(), 0x0502);
}

#[test]
fn test_stx_post_increment() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(
        0,
        &[
            0x8E, 0xBE, 0xEF, // LDX #$BEEF
            0x10, 0x8E, 0x20, 0x00, // LDY #$2000
            0xAF, 0xA1, // STX ,Y++
            0xAF, 0xA0, // STX ,Y+
        ],
    );
    step(&mut cpu, &mut bus, 3);
    assert_eq!(bus.word(0x2000), 0xBEEF);
    assert_eq!(cpu.y.value(), 0x2002);
    assert!(cpu.cc.n);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(bus.word(0x2002), 0xBEEF);
    assert_eq!(cpu.y.value(), 0x2003, ",Y+ steps by one even for a word store");
}
