//! # Tickmap Core
//!
//! Validation, storage, and queries for pipe-delimited equity listings.
//!
//! ## Overview
//!
//! - **Field validators** for identifiers, non-negative integers and decimals
//! - **Record factory** turning one `|`-separated line into an [`Equity`]
//! - **Keyed store** ([`EquityMap`]) with ordered iteration and two generic
//!   query primitives, `select` and `reduce`
//! - **Query capabilities** ([`EquityQuery`]) parameterizing those primitives
//! - **Service façade** ([`EquityService`]) for bulk ingestion and
//!   application-level queries
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | [`Identifier`] and [`Equity`] |
//! | [`error`] | Field, record, and load errors |
//! | [`factory`] | Line schema and [`parse_equity`] |
//! | [`field`] | Single-field validators |
//! | [`query`] | [`EquityQuery`], [`PeRange`], [`LowestPe`] |
//! | [`service`] | [`EquityService`] and [`IngestReport`] |
//! | [`store`] | [`EquityMap`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use tickmap_core::EquityService;
//!
//! let input = "\
//! Code|Description|Market Cap|Price|P/E Ratio
//! IBMUS|International Business Machines|198657057012|182.95|11.18
//! MSFTUS|Microsoft Corp|2500000000000|310.00|9.50
//! ";
//!
//! let mut service = EquityService::new();
//! let report = service.ingest_reader(input.as_bytes())?;
//! assert!(report.is_clean());
//!
//! assert_eq!(service.all_security_codes(), "IBMUS\nMSFTUS\n");
//! assert_eq!(service.lowest_pe().unwrap().as_str(), "MSFTUS");
//! assert_eq!(service.select_pe_range(6.0, 15.0).len(), 2);
//! assert!(service.lookup("BADUS").is_none());
//! # Ok::<(), tickmap_core::LoadError>(())
//! ```
//!
//! ## Error Handling
//!
//! A line that fails validation is a [`Rejected`] value, never a fatal error:
//! ingestion logs it, records it in the [`IngestReport`], and moves on. The
//! only failure [`EquityService`] returns is a [`LoadError`], raised when the
//! input has no header line or cannot be read.

pub mod domain;
pub mod error;
pub mod factory;
pub mod field;
pub mod query;
pub mod service;
pub mod store;

pub use domain::{Equity, Identifier, MAX_IDENTIFIER_LEN};
pub use error::{FieldError, LoadError, RecordError, Rejected};
pub use factory::{parse_equity, FieldKind, DELIMITER};
pub use field::{parse_non_negative_decimal, parse_non_negative_integer, validate_identifier};
pub use query::{EquityQuery, LowestPe, PeRange};
pub use service::{EquityService, IngestReport};
pub use store::EquityMap;
