use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::Identifier;

/// Validated equity snapshot.
///
/// Instances are only produced by [`crate::parse_equity`] and never change
/// afterwards; stores share them behind `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equity {
    identifier: Identifier,
    description: String,
    market_cap: i64,
    price: f64,
    pe_ratio: f64,
}

impl Equity {
    pub(crate) fn new(
        identifier: Identifier,
        description: impl Into<String>,
        market_cap: i64,
        price: f64,
        pe_ratio: f64,
    ) -> Self {
        Self {
            identifier,
            description: description.into(),
            market_cap,
            price,
            pe_ratio,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Market capitalization in whole currency units.
    pub fn market_cap(&self) -> i64 {
        self.market_cap
    }

    /// Market capitalization scaled to millions, as shown in listings.
    pub fn market_cap_millions(&self) -> f64 {
        self.market_cap as f64 / 1_000_000.0
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn pe_ratio(&self) -> f64 {
        self.pe_ratio
    }
}

impl Display for Equity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "code: {} description: {} last price: {:.3} market cap: {:.3} Million  P/E: {:.3}",
            self.identifier,
            self.description,
            self.price,
            self.market_cap_millions(),
            self.pe_ratio
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ibm() -> Equity {
        Equity::new(
            Identifier::parse("IBMUS").expect("valid"),
            "International Business Machines",
            198_657_057_012,
            182.95,
            11.18,
        )
    }

    #[test]
    fn displays_market_cap_in_millions_with_three_decimals() {
        assert_eq!(
            ibm().to_string(),
            "code: IBMUS description: International Business Machines last price: 182.950 \
             market cap: 198657.057 Million  P/E: 11.180"
        );
    }

    #[test]
    fn serializes_flat_fields() {
        let value = serde_json::to_value(ibm()).expect("serializable");
        assert_eq!(value["identifier"], "IBMUS");
        assert_eq!(value["market_cap"], 198_657_057_012_i64);
        assert_eq!(value["pe_ratio"], 11.18);
    }
}
