//! Machine configuration lookup.
//!
//! Resolution order:
//! 1. `--config <path>` if given (must exist).
//! 2. `<config_dir>/mc6809/config.toml` if that file exists.
//! 3. [`MachineConfig::default`].

use std::path::{Path, PathBuf};

use log::debug;
use mc6809_core::core::MachineConfig;

use crate::error::CliError;

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mc6809").join("config.toml"))
}

pub fn load_config(explicit: Option<&Path>) -> Result<MachineConfig, CliError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => {
            debug!("no config file, using defaults");
            Ok(MachineConfig::default())
        }
    }
}

fn read_config(path: &Path) -> Result<MachineConfig, CliError> {
    let text = std::fs::read_to_string(path)?;
    let config = parse_config(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<MachineConfig, toml::de::Error> {
    toml::from_str(text)
}
