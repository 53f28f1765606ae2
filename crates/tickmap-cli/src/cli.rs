//! CLI argument definitions for Tickmap.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `info` | Show the stored record for one or more codes |
//! | `codes` | List every loaded code, alphabetically |
//! | `lowest-pe` | Code with the lowest P/E ratio |
//! | `pe-range` | Records whose P/E lies in an inclusive range |
//! | `load` | Load only, reporting inserted and rejected lines |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--input` | stdin | Equity listing to load |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Fail if any input line was rejected |
//! | `--log-level` | `warn` | Diagnostic filter written to stderr |
//!
//! # Examples
//!
//! ```bash
//! tickmap --input listings.txt codes
//! tickmap --input listings.txt info IBMUS MSFTUS
//! cat listings.txt | tickmap pe-range 6 15 --format json --pretty
//! tickmap --input listings.txt --log-level debug load
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tickmap - fast lookups over pipe-delimited equity listings
///
/// Input lines look like `IBMUS|International Business Machines|198657057012|182.95|11.18`.
/// The first line is always treated as a header.
#[derive(Debug, Parser)]
#[command(
    name = "tickmap",
    author,
    version,
    about = "Fast lookups over pipe-delimited equity listings"
)]
pub struct Cli {
    /// Equity listing to read. Reads stdin when omitted.
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat rejected input lines as a failure (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Log filter (trace, debug, info, warn, error, or a full directive).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Table,
    /// Single JSON object.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the stored record for one or more codes.
    ///
    /// # Examples
    ///
    ///   tickmap info IBMUS
    ///   tickmap info IBMUS MSFTUS --format json
    Info(InfoArgs),

    /// List every loaded code in alphabetical order, one per line.
    Codes,

    /// Print the code with the lowest P/E ratio (lowest price breaks ties).
    LowestPe,

    /// List records whose P/E ratio lies within [MIN, MAX].
    ///
    /// # Examples
    ///
    ///   tickmap pe-range 6 15
    PeRange(PeRangeArgs),

    /// Load the input and report inserted and rejected lines.
    Load,
}

/// Arguments for the `info` command.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// One or more equity codes (e.g., IBMUS, MSFTUS).
    #[arg(required = true, num_args = 1..)]
    pub codes: Vec<String>,
}

/// Arguments for the `pe-range` command.
#[derive(Debug, Args)]
pub struct PeRangeArgs {
    /// Lower P/E bound, inclusive.
    pub min: f64,

    /// Upper P/E bound, inclusive.
    pub max: f64,
}
