use serde::Serialize;
use tickmap_core::{EquityService, Identifier};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CodesResponseData {
    codes: Vec<Identifier>,
}

pub fn run(service: &EquityService) -> Result<CommandResult, CliError> {
    let codes = service.all_keys();
    let lines = codes.iter().map(ToString::to_string).collect();
    let data = serde_json::to_value(CodesResponseData { codes })?;
    Ok(CommandResult::ok(data, lines))
}
