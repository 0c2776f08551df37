use std::path::PathBuf;

use mc6809_core::cpu::CpuError;
use mc6809_machines::{ProgramError, RomLoadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Cpu(#[from] CpuError),

    #[error(transparent)]
    Rom(#[from] RomLoadError),

    #[error(transparent)]
    Program(#[from] ProgramError),

    #[error("{name}: emulated ${emulated:08X}, host ${host:08X}")]
    ChecksumMismatch {
        name: &'static str,
        emulated: u32,
        host: u32,
    },
}
