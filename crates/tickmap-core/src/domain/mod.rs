//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Identifier`] | Validated equity code (`[A-Z0-9]{1,6}`) |
//! | [`Equity`] | Immutable validated equity record |

mod equity;
mod identifier;

pub use equity::Equity;
pub use identifier::{Identifier, MAX_IDENTIFIER_LEN};
