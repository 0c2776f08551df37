use std::io::Write;
use std::path::PathBuf;

use log::info;
use mc6809_core::core::MachineConfig;
use mc6809_machines::{RomImage, Simple6809};

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub image: PathBuf,
    pub load_address: u16,
    /// Defaults to the load address
    pub start: Option<u16>,
    /// Defaults to one past the image's last byte
    pub end: Option<u16>,
    pub max_ops: u64,
    pub dump_state: bool,
}

/// Load a raw image, run it from `start` until PC reaches `end`, then
/// report the registers (and optionally the full machine state).
pub fn run(
    options: &RunOptions,
    config: &MachineConfig,
    out: &mut impl Write,
) -> Result<Simple6809, CliError> {
    let image = RomImage::from_file(&options.image)?;
    let mut system = Simple6809::from_config(config);
    system.load_image(&image, options.load_address)?;

    let start = options.start.unwrap_or(options.load_address);
    let end = options
        .end
        .unwrap_or_else(|| options.load_address.wrapping_add(image.len() as u16));
    info!(
        "running {} from ${start:04x} to ${end:04x}, at most {} ops",
        image.name(),
        options.max_ops
    );
    system.machine_mut().test_run(start, end, options.max_ops)?;

    writeln!(out, "{}", system.cpu())?;
    writeln!(out, "cycles={}", system.machine().cycles())?;
    if options.dump_state {
        serde_json::to_writer_pretty(&mut *out, &system.save_state())?;
        writeln!(out)?;
    }
    Ok(system)
}
