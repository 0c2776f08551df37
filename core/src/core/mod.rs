pub mod bus;
pub mod config;
pub mod machine;
pub mod memory;

pub use bus::{Bus, InterruptState};
pub use config::MachineConfig;
pub use machine::{Machine, MachineState, QuitHandle, Throttle};
pub use memory::Memory;
