use mc6809_core::cpu::M6809;
mod common;
use common::{TestBus, step};

#[test]
fn test_nega_boundaries() {
    // (operand, result, n, z, v, c)
    let cases: [(u8, u8, bool, bool, bool, bool); 5] = [
        (0x00, 0x00, false, true, false, false),
        (0x01, 0xFF, true, false, false, true),
        (0x7F, 0x81, true, false, false, true),
        (0x80, 0x80, true, false, true, true),
        (0xFF, 0x01, false, false, false, true),
    ];

    for (operand, result, n, z, v, c) in cases {
        let mut cpu = M6809::new();
        let mut bus = TestBus::new();
        bus.load(0, &[0x86, operand, 0x40]); // LDA #operand; NEGA
        step(&mut cpu, &mut bus, 2);
        assert_eq!(cpu.a.value(), result, "NEGA of ${operand:02x}");
        assert_eq!(cpu.cc.n, n, "N for ${operand:02x}");
        assert_eq!(cpu.cc.z, z, "Z for ${operand:02x}");
        assert_eq!(cpu.cc.v, v, "V for ${operand:02x}");
        assert_eq!(cpu.cc.c, c, "C for ${operand:02x}");
        assert_eq!(cpu.cycles, 4);
    }
}

#[test]
fn test_neg_extended_memory() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x2000] = 0x05;
    bus.load(0, &[0x70, 0x20, 0x00]); // NEG $2000
    step(&mut cpu, &mut bus, 1);
    assert_eq!(bus.memory[0x2000], 0xFB);
    assert!(cpu.cc.n && cpu.cc.c);
    assert_eq!(cpu.cycles, 7);
}

#[test]
fn test_inc_direct_overflow() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x0010] = 0x7F;
    bus.load(0x0100, &[0x0C, 0x10]); // INC <$10
    cpu.pc.set(0x0100);
    cpu.cc.c = true;
    step(&mut cpu, &mut bus, 1);
    assert_eq!(bus.memory[0x0010], 0x80);
    assert!(cpu.cc.v && cpu.cc.n);
    assert!(cpu.cc.c, "INC leaves C alone");
    assert_eq!(cpu.cycles, 6);
}

#[test]
fn test_dec_indexed_to_zero() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x3005] = 0x01;
    bus.load(
        0,
        &[
            0x8E, 0x30, 0x00, // LDX #$3000
            0x6A, 0x05, // DEC 5,X
        ],
    );
    step(&mut cpu, &mut bus, 2);
    assert_eq!(bus.memory[0x3005], 0x00);
    assert!(cpu.cc.z && !cpu.cc.v);
    // LDX # (3) + DEC 5,X (6, no post-byte penalty for a 5-bit offset)
    assert_eq!(cpu.cycles, 9);
}

#[test]
fn test_clr_and_tst() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x0020] = 0xAA;
    bus.memory[0x4000] = 0x80;
    bus.load(
        0,
        &[
            0x0F, 0x20, // CLR <$20
            0x7D, 0x40, 0x00, // TST $4000
        ],
    );
    cpu.cc.set(0xFF);
    step(&mut cpu, &mut bus, 1);
    assert_eq!(bus.memory[0x0020], 0x00);
    assert!(cpu.cc.z && !cpu.cc.n && !cpu.cc.v && !cpu.cc.c);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(bus.memory[0x4000], 0x80, "TST does not write");
    assert!(cpu.cc.n && !cpu.cc.z);
}

#[test]
fn test_coma_and_clrb() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.load(
        0,
        &[
            0x86, 0x55, // LDA #$55
            0x43, // COMA
            0xC6, 0x12, // LDB #$12
            0x5F, // CLRB
        ],
    );
    step(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.a.value(), 0xAA);
    assert!(cpu.cc.n && cpu.cc.c && !cpu.cc.v);
    step(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.b.value(), 0x00);
    assert!(cpu.cc.z && !cpu.cc.c);
}

#[test]
fn test_shift_memory_and_accumulators() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x5000] = 0x81;
    bus.load(
        0,
        &[
            0x78, 0x50, 0x00, // LSL $5000   -> 0x02, C=1
            0x86, 0x01, // LDA #$01
            0x46, // RORA        -> 0x80 (C in), C=1
            0x47, // ASRA        -> 0xC0, C=0
            0x44, // LSRA        -> 0x60
            0x49, // ROLA        -> 0xC0
        ],
    );
    step(&mut cpu, &mut bus, 1);
    assert_eq!(bus.memory[0x5000], 0x02);
    assert!(cpu.cc.c);
    assert!(cpu.cc.v, "LSL: V = N xor C");

    step(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.a.value(), 0x80);
    assert!(cpu.cc.c && cpu.cc.n);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a.value(), 0xC0);
    assert!(!cpu.cc.c);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a.value(), 0x60);
    assert!(!cpu.cc.n);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.a.value(), 0xC0);
    assert!(!cpu.cc.c && cpu.cc.n);
}
