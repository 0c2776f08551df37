pub mod core;
pub mod cpu;

pub mod prelude {
    pub use crate::core::config::MachineConfig;
    pub use crate::core::machine::{Machine, QuitHandle, Throttle};
    pub use crate::core::memory::Memory;
    pub use crate::core::{Bus, bus::InterruptState};
    pub use crate::cpu::{Cpu, CpuError, CpuStateTrait, M6809, M6809State};
}
