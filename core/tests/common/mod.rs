#![allow(dead_code)]

use mc6809_core::core::{Bus, InterruptState};
use mc6809_core::cpu::{Cpu, M6809};

/// Minimal bus for testing: flat 64KB read/write memory, no peripherals,
/// interrupt lines driven directly by the test.
pub struct TestBus {
    pub memory: [u8; 0x10000],
    pub lines: InterruptState,
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            lines: InterruptState::default(),
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    pub fn set_vector(&mut self, vector: u16, target: u16) {
        let [hi, lo] = target.to_be_bytes();
        self.memory[vector as usize] = hi;
        self.memory[vector as usize + 1] = lo;
    }

    pub fn word(&self, addr: u16) -> u16 {
        u16::from_be_bytes([self.memory[addr as usize], self.memory[addr as usize + 1]])
    }
}

impl Bus for TestBus {
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn check_interrupts(&self) -> InterruptState {
        self.lines
    }
}

/// Execute `n` instructions, failing the test on any CPU error.
pub fn step(cpu: &mut M6809, bus: &mut TestBus, n: usize) {
    for _ in 0..n {
        cpu.step(bus).expect("cpu step failed");
    }
}
