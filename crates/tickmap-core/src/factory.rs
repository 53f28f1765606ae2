//! Line-oriented equity record factory.
//!
//! Input lines follow a fixed five-field layout separated by `|`:
//!
//! ```text
//! Code|Description|Market Cap|Price|P/E Ratio
//! IBMUS|International Business Machines|198657057012|182.95|11.18
//! ```
//!
//! There is no escaping, so a description cannot contain the delimiter.

use std::fmt::{Display, Formatter};

use crate::field::{parse_non_negative_decimal, parse_non_negative_integer, validate_identifier};
use crate::{Equity, RecordError, Rejected};

pub const DELIMITER: char = '|';

/// Position of each field in a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Identifier,
    Description,
    MarketCap,
    Price,
    PeRatio,
}

impl FieldKind {
    /// Fields per record; variants are declared in schema order.
    pub const COUNT: usize = Self::PeRatio.index() + 1;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Description => "description",
            Self::MarketCap => "market_cap",
            Self::Price => "price",
            Self::PeRatio => "pe_ratio",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse one line into an [`Equity`], stopping at the first invalid field.
pub fn parse_equity(line: &str) -> Result<Equity, Rejected> {
    parse_fields(line).map_err(|error| Rejected::new(line, error))
}

fn parse_fields(line: &str) -> Result<Equity, RecordError> {
    let fields = split_fields(line);
    if fields.len() != FieldKind::COUNT {
        return Err(RecordError::FieldCount {
            found: fields.len(),
            expected: FieldKind::COUNT,
        });
    }
    let raw = |kind: FieldKind| fields[kind.index()];

    let identifier = validate_identifier(raw(FieldKind::Identifier))
        .map_err(RecordError::field(FieldKind::Identifier))?;
    let description = raw(FieldKind::Description);
    let market_cap = parse_non_negative_integer(raw(FieldKind::MarketCap))
        .map_err(RecordError::field(FieldKind::MarketCap))?;
    let price = parse_non_negative_decimal(raw(FieldKind::Price))
        .map_err(RecordError::field(FieldKind::Price))?;
    let pe_ratio = parse_non_negative_decimal(raw(FieldKind::PeRatio))
        .map_err(RecordError::field(FieldKind::PeRatio))?;

    Ok(Equity::new(identifier, description, market_cap, price, pe_ratio))
}

/// Split on the delimiter. A single empty token after a trailing delimiter is
/// not a field, and an empty line has no fields at all.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.last().is_some_and(|last| last.is_empty()) {
        fields.pop();
    }
    fields
}
