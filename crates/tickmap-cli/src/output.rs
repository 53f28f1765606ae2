use std::io::{self, Write};

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, format, pretty)?;

    // Table output keeps stdout to results only.
    if format == OutputFormat::Table {
        for warning in &result.warnings {
            eprintln!("warning: {warning}");
        }
    }
    Ok(())
}

fn write_result<W: Write>(
    out: &mut W,
    result: &CommandResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = json!({
                "data": result.data,
                "warnings": result.warnings,
            });
            let payload = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => {
            for line in &result.lines {
                writeln!(out, "{line}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn sample() -> CommandResult {
        CommandResult::ok(
            json!({ "codes": ["IBMUS", "MSFTUS"] }),
            vec!["IBMUS".to_string(), "MSFTUS".to_string()],
        )
        .with_warning("1 input line(s) rejected")
    }

    fn rendered(format: OutputFormat, pretty: bool) -> String {
        let mut buffer = Vec::new();
        write_result(&mut buffer, &sample(), format, pretty).expect("render");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn table_prints_one_line_per_entry() {
        assert_eq!(rendered(OutputFormat::Table, false), "IBMUS\nMSFTUS\n");
    }

    #[test]
    fn json_wraps_data_and_warnings() {
        let output = rendered(OutputFormat::Json, false);
        assert_eq!(output.lines().count(), 1);

        let value: Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["data"]["codes"][1], "MSFTUS");
        assert_eq!(value["warnings"][0], "1 input line(s) rejected");
    }

    #[test]
    fn pretty_json_spans_multiple_lines() {
        let output = rendered(OutputFormat::Json, true);
        assert!(output.lines().count() > 1);
        serde_json::from_str::<Value>(&output).expect("valid json");
    }
}
