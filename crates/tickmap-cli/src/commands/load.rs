use serde::Serialize;
use tickmap_core::{EquityService, IngestReport};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct RejectedLine<'a> {
    line_number: Option<usize>,
    line: &'a str,
    error: String,
}

#[derive(Debug, Serialize)]
struct LoadResponseData<'a> {
    stored: usize,
    inserted: usize,
    replaced: usize,
    rejected: Vec<RejectedLine<'a>>,
}

pub fn run(service: &EquityService, report: &IngestReport) -> Result<CommandResult, CliError> {
    let mut lines = vec![format!(
        "stored {} equities (inserted {}, replaced {}, rejected {})",
        service.len(),
        report.inserted,
        report.replaced,
        report.rejected.len()
    )];
    lines.extend(report.rejected.iter().map(ToString::to_string));

    let data = serde_json::to_value(LoadResponseData {
        stored: service.len(),
        inserted: report.inserted,
        replaced: report.replaced,
        rejected: report
            .rejected
            .iter()
            .map(|rejected| RejectedLine {
                line_number: rejected.line_number(),
                line: rejected.line(),
                error: rejected.error().to_string(),
            })
            .collect(),
    })?;
    Ok(CommandResult::ok(data, lines))
}
