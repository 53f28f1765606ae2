mod codes;
mod info;
mod load;
mod screen;

use serde_json::Value;
use tickmap_core::{EquityService, IngestReport};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    /// Machine-readable payload for `--format json`.
    pub data: Value,
    /// Human-readable lines for `--format table`.
    pub lines: Vec<String>,
    pub warnings: Vec<String>,
    /// Requested codes that are not in the store.
    pub not_found: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value, lines: Vec<String>) -> Self {
        Self {
            data,
            lines,
            warnings: Vec::new(),
            not_found: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_not_found(mut self, codes: Vec<String>) -> Self {
        self.not_found.extend(codes);
        self
    }
}

pub fn run(
    cli: &Cli,
    service: &EquityService,
    report: &IngestReport,
) -> Result<CommandResult, CliError> {
    let result = match &cli.command {
        Command::Info(args) => info::run(args, service)?,
        Command::Codes => codes::run(service)?,
        Command::LowestPe => screen::lowest_pe(service)?,
        Command::PeRange(args) => screen::pe_range(args, service)?,
        Command::Load => load::run(service, report)?,
    };

    if report.rejected.is_empty() || matches!(cli.command, Command::Load) {
        return Ok(result);
    }
    Ok(result.with_warning(format!(
        "{} input line(s) rejected; run `load` for details",
        report.rejected.len()
    )))
}
