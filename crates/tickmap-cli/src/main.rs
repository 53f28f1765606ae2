mod cli;
mod commands;
mod error;
mod output;

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::Parser;
use tickmap_core::{EquityService, IngestReport};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let mut service = EquityService::new();
    let report = load(cli, &mut service)?;

    let result = commands::run(cli, &service, &report)?;
    output::render(&result, cli.format, cli.pretty)?;

    if !result.not_found.is_empty() {
        return Err(CliError::NotFound {
            codes: result.not_found,
        });
    }

    if cli.strict && !report.is_clean() {
        return Err(CliError::StrictModeViolation {
            rejected_count: report.rejected.len(),
        });
    }

    Ok(ExitCode::SUCCESS)
}

fn load(cli: &Cli, service: &mut EquityService) -> Result<IngestReport, CliError> {
    let report = match &cli.input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading equities");
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            service.ingest_reader(BufReader::new(file))?
        }
        None => {
            tracing::debug!("reading equities from stdin");
            service.ingest_reader(io::stdin().lock())?
        }
    };
    Ok(report)
}
