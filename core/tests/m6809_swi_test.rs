use mc6809_core::cpu::M6809;
use mc6809_core::cpu::m6809::{SWI_VECTOR, SWI2_VECTOR, SWI3_VECTOR};
mod common;
use common::{TestBus, step};

fn setup() -> (M6809, TestBus) {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.set_vector(SWI_VECTOR, 0x2000);
    bus.set_vector(SWI2_VECTOR, 0x3000);
    bus.set_vector(SWI3_VECTOR, 0x4000);
    bus.load(0x2000, &[0x3B]); // RTI
    bus.load(0x3000, &[0x3B]); // RTI
    bus.load(0x4000, &[0x3B]); // RTI
    cpu.s.set(0x1000);
    cpu.u.set(0x5555);
    cpu.x.set(0x1234);
    cpu.a.set(0xAA);
    cpu.cc.set(0x00);
    (cpu, bus)
}

#[test]
fn test_swi_rti_round_trip() {
    let (mut cpu, mut bus) = setup();
    bus.load(0x0100, &[0x3F, 0x12]); // SWI; NOP
    cpu.pc.set(0x0100);

    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.pc.value(), 0x2000);
    assert_eq!(cpu.s.value(), 0x1000 - 12, "entire state stacked");
    assert!(cpu.cc.e && cpu.cc.i && cpu.cc.f);
    assert_eq!(bus.word(0x1000 - 2), 0x0101, "PC of the next instruction");
    assert_eq!(bus.memory[0x1000 - 12], 0x80, "stacked CC has only E set");
    assert_eq!(cpu.cycles, 19);

    // Clobber registers inside the handler; RTI must bring them back
    cpu.x.set(0);
    cpu.a.set(0);
    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.pc.value(), 0x0101);
    assert_eq!(cpu.s.value(), 0x1000);
    assert_eq!(cpu.x.value(), 0x1234);
    assert_eq!(cpu.a.value(), 0xAA);
    assert_eq!(cpu.u.value(), 0x5555);
    assert!(!cpu.cc.i && !cpu.cc.f, "masks restored");
    assert_eq!(cpu.cycles, 19 + 6);
}

#[test]
fn test_swi2_and_swi3_leave_masks() {
    let (mut cpu, mut bus) = setup();
    bus.load(
        0,
        &[
            0x10, 0x3F, // SWI2
            0x11, 0x3F, // SWI3
        ],
    );

    step(&mut cpu, &mut bus, 1);
    assert_eq!(cpu.pc.value(), 0x3000);
    assert!(cpu.cc.e && !cpu.cc.i && !cpu.cc.f);
    assert_eq!(cpu.cycles, 1 + 20);

    step(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.pc.value(), 0x4000);
    assert!(!cpu.cc.i && !cpu.cc.f);
    assert_eq!(bus.word(0x1000 - 2), 0x0004);
}
