use serde::Serialize;
use tickmap_core::{Equity, EquityService, Identifier};

use crate::cli::PeRangeArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct LowestPeResponseData {
    code: Option<Identifier>,
}

#[derive(Debug, Serialize)]
struct PeRangeResponseData<'a> {
    min: f64,
    max: f64,
    count: usize,
    equities: Vec<&'a Equity>,
}

pub fn lowest_pe(service: &EquityService) -> Result<CommandResult, CliError> {
    let code = service.lowest_pe();
    let lines = code.iter().map(ToString::to_string).collect();
    let data = serde_json::to_value(LowestPeResponseData { code: code.clone() })?;

    let result = CommandResult::ok(data, lines);
    if code.is_none() {
        return Ok(result.with_warning("no equities loaded"));
    }
    Ok(result)
}

pub fn pe_range(args: &PeRangeArgs, service: &EquityService) -> Result<CommandResult, CliError> {
    if args.min.is_nan() || args.max.is_nan() || args.min > args.max {
        return Err(CliError::InvalidRange {
            min: args.min,
            max: args.max,
        });
    }

    let selected = service.select_pe_range(args.min, args.max);
    let lines = selected.values().map(|equity| equity.to_string()).collect();
    let data = serde_json::to_value(PeRangeResponseData {
        min: args.min,
        max: args.max,
        count: selected.len(),
        equities: selected.values().map(|equity| &**equity).collect(),
    })?;
    Ok(CommandResult::ok(data, lines))
}
