//! Caller-supplied selection and comparison logic for [`EquityMap`] queries.
//!
//! [`EquityMap`]: crate::EquityMap

use crate::Equity;

/// Capability set consumed by [`crate::EquityMap::select`] and
/// [`crate::EquityMap::reduce`].
///
/// Implementors override whichever capability they need. The provided
/// defaults select nothing and always keep the left operand.
pub trait EquityQuery {
    /// Inclusion test for `select`.
    fn select(&self, _equity: &Equity) -> bool {
        false
    }

    /// Return whichever of `a` or `b` is preferred.
    ///
    /// The reduction compares the returned reference against `a` by address,
    /// so implementations must return one of their arguments, not a copy.
    /// For a result independent of iteration order the preference must be
    /// transitive.
    fn compare<'a>(&self, a: &'a Equity, _b: &'a Equity) -> &'a Equity {
        a
    }
}

/// Selects equities whose P/E ratio lies in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeRange {
    pub min: f64,
    pub max: f64,
}

impl PeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl EquityQuery for PeRange {
    fn select(&self, equity: &Equity) -> bool {
        (self.min..=self.max).contains(&equity.pe_ratio())
    }
}

/// Prefers the lowest P/E ratio, then the lowest price.
///
/// On an exact tie the left operand is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowestPe;

impl EquityQuery for LowestPe {
    fn compare<'a>(&self, a: &'a Equity, b: &'a Equity) -> &'a Equity {
        if b.pe_ratio() < a.pe_ratio() {
            return b;
        }
        if b.pe_ratio() == a.pe_ratio() && b.price() < a.price() {
            return b;
        }
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_equity;

    fn equity(line: &str) -> Equity {
        parse_equity(line).expect("fixture line should parse")
    }

    struct Defaults;

    impl EquityQuery for Defaults {}

    #[test]
    fn defaults_reject_and_keep_left() {
        let a = equity("AAA|a|1|1|1");
        let b = equity("BBB|b|1|1|1");
        assert!(!Defaults.select(&a));
        assert!(std::ptr::eq(Defaults.compare(&a, &b), &a));
    }

    #[test]
    fn pe_range_is_inclusive() {
        let range = PeRange::new(6.0, 15.0);
        assert!(range.select(&equity("LOW|x|1|1|6")));
        assert!(range.select(&equity("HIGH|x|1|1|15")));
        assert!(range.select(&equity("MID|x|1|1|9.5")));
        assert!(!range.select(&equity("OUT|x|1|1|15.01")));
        assert!(!range.select(&equity("UNDER|x|1|1|5.99")));
    }

    #[test]
    fn pe_range_with_inverted_bounds_selects_nothing() {
        assert!(!PeRange::new(15.0, 6.0).select(&equity("MID|x|1|1|9.5")));
    }

    #[test]
    fn lowest_pe_breaks_ties_on_price() {
        let a = equity("AAA|a|1|20|9.5");
        let b = equity("BBB|b|1|10|9.5");
        let c = equity("CCC|c|1|5|11");
        assert!(std::ptr::eq(LowestPe.compare(&a, &b), &b));
        assert!(std::ptr::eq(LowestPe.compare(&b, &a), &b));
        assert!(std::ptr::eq(LowestPe.compare(&c, &a), &a));
    }

    #[test]
    fn lowest_pe_keeps_left_on_exact_tie() {
        let a = equity("AAA|a|1|10|9.5");
        let b = equity("BBB|b|2|10|9.5");
        assert!(std::ptr::eq(LowestPe.compare(&a, &b), &a));
        assert!(std::ptr::eq(LowestPe.compare(&b, &a), &b));
    }
}
