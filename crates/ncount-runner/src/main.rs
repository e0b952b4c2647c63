//! NCount Runner
//!
//! ## Usage
//!
//! ```bash
//! # Decode a header between buffer files (status written to the last path)
//! ncount-runner read-ncount counter.bin max_sv.bin table_log.bin header.bin hb_size.bin status.bin
//!
//! # Print a decoded header
//! ncount-runner inspect header.bin
//!
//! # As JSON, with settings from a config file
//! ncount-runner --config runner.json inspect header.bin --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::FmtSubscriber;

use ncount_runner::{run_inspect, run_read_ncount, ReadNCountFiles, RunnerConfig};

#[derive(Parser, Debug)]
#[command(name = "ncount-runner")]
#[command(author = "Daemoniorum LLC")]
#[command(version)]
#[command(about = "FSE NCount header decoder", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a header, rewriting the counter, scalars and status files
    ReadNcount {
        counter: PathBuf,
        max_symbol_value: PathBuf,
        table_log: PathBuf,
        header: PathBuf,
        header_size: PathBuf,
        status: PathBuf,
    },

    /// Decode a header file and print the distribution
    Inspect {
        header: PathBuf,

        /// Largest symbol accepted
        #[arg(long)]
        max_symbol_value: Option<u32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Load the config file, if any, and layer the command-line flags over it.
fn load_config(args: &Args) -> ncount_runner::Result<RunnerConfig> {
    let config = match &args.config {
        Some(path) => RunnerConfig::from_file(path)?,
        None => RunnerConfig::default(),
    };
    let max_symbol_value = match &args.command {
        Command::Inspect {
            max_symbol_value, ..
        } => *max_symbol_value,
        Command::ReadNcount { .. } => None,
    };
    config.merge_args(args.log_level.as_deref(), max_symbol_value)
}

fn run(args: Args, config: RunnerConfig) -> ncount_runner::Result<()> {
    match args.command {
        Command::ReadNcount {
            counter,
            max_symbol_value,
            table_log,
            header,
            header_size,
            status,
        } => {
            let files = ReadNCountFiles {
                counter,
                max_symbol_value,
                table_log,
                header,
                header_size,
                status,
            };
            run_read_ncount(&files)?;
        }
        Command::Inspect { header, json, .. } => {
            let report = run_inspect(&header, config.max_symbol_value)?;
            print!("{}", report.render(config.report_format(json))?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (config, level) = match load_config(&args).and_then(|c| c.level().map(|l| (c, l))) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("ncount-runner: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("ncount-runner: tracing subscriber already installed");
    }

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
