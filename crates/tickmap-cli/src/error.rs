use std::path::PathBuf;

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] tickmap_core::LoadError),

    #[error("cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid P/E range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("no such equity code: {}", codes.join(", "))]
    NotFound { codes: Vec<String> },

    #[error("strict mode failed: rejected={rejected_count}")]
    StrictModeViolation { rejected_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Load(tickmap_core::LoadError::MissingHeader) => 2,
            Self::Load(tickmap_core::LoadError::Io(_)) => 10,
            Self::Open { .. } => 10,
            Self::InvalidRange { .. } => 2,
            Self::NotFound { .. } => 3,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
