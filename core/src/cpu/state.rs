//! CPU state snapshot types and traits

use serde::{Deserialize, Serialize};

/// Trait for CPU types that can capture and restore their register state
pub trait CpuStateTrait {
    type Snapshot;
    fn snapshot(&self) -> Self::Snapshot;
    fn restore(&mut self, snapshot: &Self::Snapshot);
}

/// M6809 register state, including the running cycle counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct M6809State {
    pub a: u8,       // Accumulator A
    pub b: u8,       // Accumulator B
    pub dp: u8,      // Direct Page register
    pub x: u16,      // Index register X
    pub y: u16,      // Index register Y
    pub u: u16,      // User stack pointer
    pub s: u16,      // Hardware stack pointer
    pub pc: u16,     // Program counter
    pub cc: u8,      // Condition codes, packed E..C
    pub cycles: u64, // Cycles executed so far
}
