use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::factory::FieldKind;

/// Single-field validation and conversion failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("identifier cannot be empty")]
    EmptyIdentifier,
    #[error("identifier length {len} exceeds max {max}")]
    IdentifierTooLong { len: usize, max: usize },
    #[error("identifier contains invalid character '{ch}' at index {index}")]
    IdentifierInvalidChar { ch: char, index: usize },

    #[error("numeric value cannot be empty")]
    EmptyNumber,
    #[error("numeric value contains invalid character '{ch}' at index {index}")]
    InvalidDigit { ch: char, index: usize },
    #[error("numeric value '{value}' is out of range")]
    Overflow { value: String },
    #[error("'{value}' is not a well-formed decimal")]
    MalformedDecimal { value: String },
}

/// Reasons a whole line fails the record schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { found: usize, expected: usize },

    #[error("line is not valid UTF-8 after byte {valid_up_to}")]
    Encoding { valid_up_to: usize },

    #[error("field '{field}': {source}")]
    Field {
        field: FieldKind,
        #[source]
        source: FieldError,
    },
}

impl RecordError {
    pub(crate) fn field(field: FieldKind) -> impl FnOnce(FieldError) -> Self {
        move |source| Self::Field { field, source }
    }
}

/// A line that could not be turned into an equity record.
///
/// Carries the original text so the caller can report it. Rejection is a
/// per-line condition and never stops ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    line: String,
    line_number: Option<usize>,
    error: RecordError,
}

impl Rejected {
    pub fn new(line: impl Into<String>, error: RecordError) -> Self {
        Self {
            line: line.into(),
            line_number: None,
            error,
        }
    }

    /// Attach the 1-based position of the line in its source.
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    pub fn error(&self) -> &RecordError {
        &self.error
    }
}

impl Display for Rejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.line_number {
            Some(number) => write!(f, "line {number} rejected ({}): {}", self.error, self.line),
            None => write!(f, "line rejected ({}): {}", self.error, self.line),
        }
    }
}

impl std::error::Error for Rejected {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Setup failures that prevent ingestion as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no header line in input")]
    MissingHeader,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
