use serde::Serialize;
use tickmap_core::{Equity, EquityService};

use crate::cli::InfoArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct InfoResponseData<'a> {
    equities: Vec<&'a Equity>,
    not_found: &'a [String],
}

pub fn run(args: &InfoArgs, service: &EquityService) -> Result<CommandResult, CliError> {
    let mut found = Vec::new();
    let mut not_found = Vec::new();
    for code in &args.codes {
        match service.lookup(code) {
            Some(equity) => found.push(equity),
            None => not_found.push(code.clone()),
        }
    }

    let lines = found.iter().map(|equity| equity.to_string()).collect();
    let data = serde_json::to_value(InfoResponseData {
        equities: found.iter().map(|equity| &**equity).collect(),
        not_found: &not_found,
    })?;

    Ok(CommandResult::ok(data, lines).with_not_found(not_found))
}
