//! Ordering by a user-selected key.
//!
//! Every list surface exposes a small enum of sort keys (name ascending,
//! price descending, ...) implementing [`SortBy`]. Sorting is stable: equal
//! keys keep their relative input order.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient a base (ascending) comparison.
    pub fn orient(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A comparator selected by key.
pub trait SortBy<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Return a new collection ordered by `key`, ties in input order.
pub fn sort_by_key<T: Clone, K: SortBy<T>>(items: &[T], key: &K) -> Vec<T> {
    let mut out = items.to_vec();
    // Vec::sort_by is stable, which is what keeps ties in fixture order.
    out.sort_by(|a, b| key.compare(a, b));
    out
}
