//! Pagination as an explicit, separately-applied operation.
//!
//! List surfaces currently render the full filtered result ("page 1" is
//! everything); whether to wire slicing into them is an open product
//! question. The operation exists here so the answer is a one-line change
//! either way.

use serde::{Deserialize, Serialize};

/// A 1-based page description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// Total pages needed for `len` elements; at least 1 so an empty result
    /// still has a "page 1".
    pub fn count_for(len: usize, size: usize) -> usize {
        if size == 0 {
            return 1;
        }
        len.div_ceil(size).max(1)
    }
}

/// Slice out one page of an already filtered/sorted collection.
///
/// A page past the end is empty; page numbers below 1 are treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: &Page) -> Vec<T> {
    if page.size == 0 {
        return items.to_vec();
    }
    let number = page.number.max(1);
    let start = (number - 1).saturating_mul(page.size);
    items.iter().skip(start).take(page.size).cloned().collect()
}
