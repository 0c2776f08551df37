use crate::core::bus::{Bus, InterruptState};

/// Generic CPU interface driven by [`crate::core::Machine`].
pub trait Cpu: CpuStateTrait {
    /// Load the reset vector and return to the fetch state.
    fn reset<B: Bus + ?Sized>(&mut self, bus: &mut B);

    /// Execute one instruction (or one idle cycle while waiting).
    fn step<B: Bus + ?Sized>(&mut self, bus: &mut B) -> Result<(), CpuError>;

    /// Latch interrupt lines; they are serviced at the next instruction boundary.
    fn signal_interrupt(&mut self, int: InterruptState);

    /// True while parked in CWAI or SYNC.
    fn is_sleeping(&self) -> bool;

    /// Total cycles executed since construction (or the last restore).
    fn cycles(&self) -> u64;
}

pub mod error;
pub use error::{ConfigError, CpuError};

pub mod state;
pub use state::{CpuStateTrait, M6809State};

pub mod m6809;
pub use m6809::M6809;
