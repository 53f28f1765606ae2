use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::FieldError;

pub const MAX_IDENTIFIER_LEN: usize = 6;

/// Equity code: 1 to 6 characters from `[A-Z0-9]`.
///
/// Unlike ticker input typed by a user, identifiers arrive from data files and
/// are taken exactly as written: no trimming and no case folding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn parse(input: &str) -> Result<Self, FieldError> {
        for (index, ch) in input.chars().enumerate() {
            if !(ch.is_ascii_uppercase() || ch.is_ascii_digit()) {
                return Err(FieldError::IdentifierInvalidChar { ch, index });
            }
        }

        // Charset is pure ASCII at this point, so bytes == chars.
        let len = input.len();
        if len == 0 {
            return Err(FieldError::EmptyIdentifier);
        }
        if len > MAX_IDENTIFIER_LEN {
            return Err(FieldError::IdentifierTooLong {
                len,
                max: MAX_IDENTIFIER_LEN,
            });
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for Identifier {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}
