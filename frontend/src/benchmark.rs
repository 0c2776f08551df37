use std::io::Write;
use std::time::{Duration, Instant};

use mc6809_core::core::{Machine, MachineConfig, Memory};
use mc6809_machines::programs::{self, PRINTABLE};
use mc6809_machines::rom_loader::crc32;

use crate::error::CliError;

#[derive(Debug, Clone, Copy)]
pub struct BenchmarkOptions {
    pub loops: u32,
    pub multiply: usize,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            loops: 5,
            multiply: 15,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub cycles: u64,
    pub elapsed: Duration,
}

impl Sample {
    pub fn cycles_per_sec(&self) -> f64 {
        self.cycles as f64 / self.elapsed.as_secs_f64().max(f64::EPSILON)
    }
}

type Checksum = fn(&mut Machine<Memory>, &[u8]) -> Result<u32, CliError>;

fn crc16(machine: &mut Machine<Memory>, data: &[u8]) -> Result<u32, CliError> {
    Ok(programs::run_crc16(machine, data)? as u32)
}

fn crc32_6809(machine: &mut Machine<Memory>, data: &[u8]) -> Result<u32, CliError> {
    Ok(programs::run_crc32(machine, data)?)
}

/// Time `loops` runs of one checksum program, each on a fresh machine, and
/// check the result against the host.
fn bench_one(
    name: &'static str,
    checksum: Checksum,
    host: u32,
    data: &[u8],
    options: &BenchmarkOptions,
    config: &MachineConfig,
    out: &mut impl Write,
) -> Result<Vec<Sample>, CliError> {
    writeln!(out, "{name} benchmark")?;
    let mut samples = Vec::with_capacity(options.loops as usize);
    for round in 1..=options.loops {
        let mut machine = Machine::from_config(Memory::new(&config.memory), config);
        let started = Instant::now();
        let emulated = checksum(&mut machine, data)?;
        let sample = Sample {
            cycles: machine.cycles(),
            elapsed: started.elapsed(),
        };
        if emulated != host {
            return Err(CliError::ChecksumMismatch {
                name,
                emulated,
                host,
            });
        }
        writeln!(
            out,
            "  {round}: {} cycles in {:.3}s, {:.0} cycles/sec",
            sample.cycles,
            sample.elapsed.as_secs_f64(),
            sample.cycles_per_sec()
        )?;
        samples.push(sample);
    }
    write_summary(&samples, out)?;
    Ok(samples)
}

fn write_summary(samples: &[Sample], out: &mut impl Write) -> Result<(), CliError> {
    let cycles: u64 = samples.iter().map(|s| s.cycles).sum();
    let elapsed: Duration = samples.iter().map(|s| s.elapsed).sum();
    let total = Sample { cycles, elapsed };
    writeln!(
        out,
        "  total: {cycles} cycles in {:.3}s, {:.0} cycles/sec",
        elapsed.as_secs_f64(),
        total.cycles_per_sec()
    )?;
    Ok(())
}

/// Run the CRC-16 and CRC-32 programs over the printable ASCII set repeated
/// `multiply` times.
pub fn benchmark(
    options: &BenchmarkOptions,
    config: &MachineConfig,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let data = PRINTABLE.repeat(options.multiply.max(1));
    writeln!(out, "{} bytes per run, {} loops", data.len(), options.loops)?;

    bench_one(
        "CRC16",
        crc16,
        programs::crc16(&data) as u32,
        &data,
        options,
        config,
        out,
    )?;
    bench_one(
        "CRC32",
        crc32_6809,
        crc32(&data),
        &data,
        options,
        config,
        out,
    )?;
    Ok(())
}
