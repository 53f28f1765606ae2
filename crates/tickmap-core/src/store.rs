//! Keyed container for validated equities.

use std::collections::btree_map::{self, BTreeMap};
use std::sync::Arc;

use crate::{Equity, EquityQuery, Identifier};

/// Equities keyed by identifier, iterated in ascending key order.
///
/// Keys are always derived from the record being inserted, so a key never
/// disagrees with its record's identifier. Records are shared, not copied,
/// between a map and the maps produced by [`EquityMap::select`].
#[derive(Debug, Default)]
pub struct EquityMap {
    entries: BTreeMap<Identifier, Arc<Equity>>,
}

impl EquityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same identifier.
    ///
    /// Returns the replaced record.
    pub fn insert(&mut self, equity: impl Into<Arc<Equity>>) -> Option<Arc<Equity>> {
        let equity = equity.into();
        self.entries.insert(equity.identifier().clone(), equity)
    }

    /// Exact-match lookup.
    pub fn find(&self, identifier: &str) -> Option<&Arc<Equity>> {
        self.entries.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in ascending identifier order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &Identifier> + '_ {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Arc<Equity>> + '_ {
        self.entries.values()
    }

    /// Collect every record accepted by `query.select` into a new map.
    pub fn select<Q>(&self, query: &Q) -> EquityMap
    where
        Q: EquityQuery + ?Sized,
    {
        let mut selected = EquityMap::new();
        for equity in self.values() {
            if query.select(equity) {
                selected.insert(Arc::clone(equity));
            }
        }
        selected
    }

    /// Fold the records in key order down to the one `query.compare` prefers.
    ///
    /// A singleton map returns its record without calling the comparator.
    /// The running best is replaced only when the comparator hands back the
    /// candidate rather than the current best, so ties keep the earlier key.
    pub fn reduce<Q>(&self, query: &Q) -> Option<Arc<Equity>>
    where
        Q: EquityQuery + ?Sized,
    {
        let mut values = self.values();
        let mut best = values.next()?;
        for candidate in values {
            let chosen = query.compare(best, candidate);
            if !std::ptr::eq(chosen, &**best) {
                best = candidate;
            }
        }
        Some(Arc::clone(best))
    }
}

impl Extend<Equity> for EquityMap {
    fn extend<T: IntoIterator<Item = Equity>>(&mut self, iter: T) {
        for equity in iter {
            self.insert(equity);
        }
    }
}

impl FromIterator<Equity> for EquityMap {
    fn from_iter<T: IntoIterator<Item = Equity>>(iter: T) -> Self {
        let mut map = EquityMap::new();
        map.extend(iter);
        map
    }
}

impl<'a> IntoIterator for &'a EquityMap {
    type Item = (&'a Identifier, &'a Arc<Equity>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered iterator over `(identifier, record)` pairs.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, Identifier, Arc<Equity>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Identifier, &'a Arc<Equity>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
