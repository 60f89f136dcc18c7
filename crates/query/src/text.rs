//! Free-text matching: case-insensitive substring over designated fields.

/// Seam implemented by every entity that appears in a searchable list.
///
/// An entity designates which of its fields participate in free-text search
/// (a vendor matches on name and contact person, a requisition on title and
/// department, and so on).
pub trait TextSearch {
    /// The fields free-text search runs against, in display order.
    fn search_fields(&self) -> Vec<&str>;
}

/// Whether `item` matches `needle` in any designated field.
///
/// Matching is case-insensitive substring containment. An empty needle
/// matches everything, so an empty search box narrows nothing.
pub fn text_matches<T: TextSearch>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Narrow a collection by free-text search, preserving input order.
pub fn search<T: TextSearch + Clone>(items: &[T], needle: &str) -> Vec<T> {
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| text_matches(*item, needle))
        .cloned()
        .collect()
}
