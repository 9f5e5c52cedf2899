//! botgen
//!
//! Generates Telegram Bot API helper methods, options structs and constant
//! enums from a machine-readable API schema.

use std::path::PathBuf;
use std::process::ExitCode;

use botgen_gen::errors::GeneratorError;
use botgen_gen::output::{OutputMode, generate_and_write};
use botgen_gen::validation::load_api;
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// botgen - generates Bot API helpers and constants from a schema document
#[derive(Parser, Debug)]
#[command(name = "botgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Schema document describing the API's types and methods
    #[arg(short, long, default_value = "schema/api.json")]
    schema: PathBuf,

    /// Output directory for generated files
    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    /// Print generated code without writing files
    #[arg(long, conflicts_with = "check")]
    dry_run: bool,

    /// Fail if the generated files on disk are out of date
    #[arg(long)]
    check: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn mode(&self) -> OutputMode {
        if self.dry_run {
            OutputMode::DryRun
        } else if self.check {
            OutputMode::Check
        } else {
            OutputMode::Write
        }
    }
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    let api = load_api(&cli.schema)?;
    info!(
        types = api.type_count(),
        methods = api.method_count(),
        "Loaded schema"
    );

    let reports = generate_and_write(&api, &cli.output, cli.mode())?;
    for report in &reports {
        info!(path = %report.path.display(), status = %report.status, "Done");
    }

    Ok(())
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
