pub mod programs;
pub mod rom_loader;
pub mod simple6809;

pub use programs::ProgramError;
pub use rom_loader::{RomImage, RomLoadError};
pub use simple6809::Simple6809;
