use std::cell::RefCell;
use std::rc::Rc;

use mc6809_core::core::config::{AddressRange, MemoryConfig};
use mc6809_core::core::{Bus, Machine, MachineConfig, MachineState, Memory};
use mc6809_core::cpu::{CpuError, M6809};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn machine_with(config: &MachineConfig, program: &[u8], origin: u16) -> Machine<Memory> {
    let mut memory = Memory::new(&config.memory);
    memory.load(origin, program);
    Machine::from_config(memory, config)
}

#[test]
fn test_rom_is_write_protected_for_the_cpu() {
    let config = MachineConfig::default();
    let mut machine = machine_with(
        &config,
        &[
            0x86, 0x55, // LDA #$55
            0xB7, 0x90, 0x00, // STA $9000 (ROM)
            0xB7, 0x10, 0x00, // STA $1000 (RAM)
        ],
        0x0000,
    );
    machine.bus.load(0x9000, &[0xAA]);
    machine.test_run(0x0000, 0x0008, 10).expect("run");
    assert_eq!(machine.bus.peek(0x9000), 0xAA);
    assert_eq!(machine.bus.peek(0x1000), 0x55);
}

#[test]
fn test_unmapped_reads_zero() {
    let config = MachineConfig {
        memory: MemoryConfig {
            ram: AddressRange::new(0x0000, 0x0FFF),
            rom: None,
        },
        ..Default::default()
    };
    let mut machine = machine_with(&config, &[0xB6, 0x80, 0x00], 0x0000); // LDA $8000
    machine.bus.load(0x8000, &[0x77]);
    machine.cpu.a.set(0x11);
    machine.test_run(0x0000, 0x0003, 2).expect("run");
    assert_eq!(machine.cpu.a.value(), 0x00);
    assert!(machine.cpu.cc.z);
}

#[test]
fn test_memory_mapped_output_port() {
    let config = MachineConfig {
        memory: MemoryConfig::all_ram(),
        ..Default::default()
    };
    let program = b"\x8E\x00\x20\xA6\x80\x27\x05\xB7\xE0\x00\x20\xF7\x12";
    //  LDX #$0020 / loop: LDA ,X+ / BEQ done / STA $E000 / BRA loop / done: NOP
    let mut machine = machine_with(&config, program, 0x0000);
    machine.bus.load(0x0020, b"hi\0");

    let output = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&output);
    machine
        .bus
        .add_write_byte_callback(0xE000..=0xE000, move |_, value| sink.borrow_mut().push(value));

    machine.test_run(0x0000, 0x000C, 100).expect("run");
    assert_eq!(output.borrow().as_slice(), b"hi");
    assert_eq!(machine.bus.peek(0xE000), 0x00, "callback replaces the store");
}

#[test]
fn test_memory_mapped_input_port() {
    let mut memory = Memory::new(&MemoryConfig::all_ram());
    let mut next = 0u8;
    memory.add_read_byte_callback(0xFF00..=0xFF01, move |addr| {
        next = next.wrapping_add(1);
        (addr as u8) ^ next
    });
    assert_eq!(memory.read_byte(0xFF00), 0x01);
    assert_eq!(memory.read_byte(0xFF01), 0x03);
    assert_eq!(memory.read_word(0xFF00), 0x0305);
}

#[test]
fn test_run_reports_missing_end() {
    let config = MachineConfig {
        memory: MemoryConfig::all_ram(),
        ..Default::default()
    };
    let mut machine = machine_with(&config, &[0x20, 0xFE], 0x0400); // BRA *
    let err = machine.test_run(0x0400, 0x0402, 50).unwrap_err();
    assert_eq!(
        err,
        CpuError::MaxOpsReached {
            max_ops: 50,
            end: 0x0402
        }
    );
}

#[test]
fn test_run_budget_counts_the_end_check() {
    let config = MachineConfig {
        memory: MemoryConfig::all_ram(),
        ..Default::default()
    };
    // NOP ; NOP
    let mut machine = machine_with(&config, &[0x12, 0x12], 0x0000);
    assert!(matches!(
        machine.test_run(0x0000, 0x0002, 2),
        Err(CpuError::MaxOpsReached { max_ops: 2, end: 0x0002 })
    ));
    machine.test_run(0x0000, 0x0002, 3).expect("run");
    assert_eq!(machine.cpu.pc.value(), 0x0002);
}

#[test]
fn test_run_stops_on_unknown_opcode() {
    let config = MachineConfig {
        memory: MemoryConfig::all_ram(),
        ..Default::default()
    };
    let mut machine = machine_with(&config, &[0x12, 0x12, 0x87], 0x0000);
    let err = machine.test_run(0x0000, 0x0010, 10).unwrap_err();
    assert!(matches!(err, CpuError::UnknownOpcode { address: 0x0002, opcode: 0x87 }));
}

#[test]
fn test_state_survives_json() {
    let config = MachineConfig {
        memory: MemoryConfig::all_ram(),
        ..Default::default()
    };
    let mut machine = machine_with(&config, &[], 0x0000);
    let mut rng = StdRng::seed_from_u64(6809);
    let image: Vec<u8> = (0..0x10000).map(|_| rng.r#gen()).collect();
    machine.bus.restore_image(&image);
    machine.cpu.x.set(rng.gen_range(0..0x10000));
    machine.cpu.cc.set(0xD5);

    let state = machine.get_state();
    let json = serde_json::to_string(&state).expect("serialize");
    let back: MachineState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, state);

    let mut other = Machine::from_config(Memory::new(&config.memory), &config);
    other.set_state(&back);
    assert_eq!(other.bus.image(), image.as_slice());
    assert_eq!(other.cpu.x.value(), machine.cpu.x.value());
    assert_eq!(other.cpu.cc.get(), 0xD5);
}

#[test]
fn test_machine_uses_fresh_cpu() {
    let machine = Machine::new(Memory::default());
    let cpu = M6809::new();
    assert_eq!(machine.cpu.pc.value(), cpu.pc.value());
    assert_eq!(machine.cycles(), 0);
}
