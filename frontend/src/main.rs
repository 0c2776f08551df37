use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{LevelFilter, error};

mod benchmark;
mod config;
mod error;
mod run;

use benchmark::BenchmarkOptions;
use error::CliError;
use run::RunOptions;

/// Motorola 6809 emulator.
#[derive(Debug, Parser)]
#[command(name = "mc6809", version)]
struct Cli {
    /// Machine config (TOML). Defaults to <config dir>/mc6809/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace. Overrides RUST_LOG.
    #[arg(long, global = true, value_name = "LEVEL")]
    verbosity: Option<LevelFilter>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a raw binary and run it.
    Run {
        image: PathBuf,

        #[arg(long, value_parser = parse_address, default_value = "0")]
        load_address: u16,

        /// First instruction [default: load address]
        #[arg(long, value_parser = parse_address)]
        start: Option<u16>,

        /// Stop when PC reaches this address [default: end of image]
        #[arg(long, value_parser = parse_address)]
        end: Option<u16>,

        #[arg(long, default_value_t = 1_000_000)]
        max_ops: u64,

        /// Print the machine state as JSON afterwards.
        #[arg(long)]
        dump_state: bool,
    },

    /// Time the CRC-16 and CRC-32 programs.
    Benchmark {
        #[arg(long, default_value_t = 5)]
        loops: u32,

        /// Repetitions of the 100 printable ASCII characters per run
        #[arg(long, default_value_t = 15)]
        multiply: usize,
    },
}

/// `$C000`, `0xC000` or decimal.
fn parse_address(text: &str) -> Result<u16, String> {
    let parsed = if let Some(hex) = text.strip_prefix('$') {
        u16::from_str_radix(hex, 16)
    } else if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else {
        text.parse()
    };
    parsed.map_err(|e| format!("invalid address {text:?}: {e}"))
}

fn init_logging(verbosity: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = verbosity {
        builder.filter_level(level);
    }
    builder.init();
}

fn execute(cli: Cli) -> Result<(), CliError> {
    let config = config::load_config(cli.config.as_deref())?;
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Run {
            image,
            load_address,
            start,
            end,
            max_ops,
            dump_state,
        } => {
            let options = RunOptions {
                image,
                load_address,
                start,
                end,
                max_ops,
                dump_state,
            };
            run::run(&options, &config, &mut out)?;
        }
        Command::Benchmark { loops, multiply } => {
            benchmark::benchmark(&BenchmarkOptions { loops, multiply }, &config, &mut out)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
