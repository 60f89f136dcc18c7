//! `eproc-query` — the list query layer shared by every list surface.
//!
//! Given a collection and user-supplied criteria, produce the subset to
//! display. All predicates AND together and commute; sorting is stable;
//! the input collection is never mutated.

pub mod page;
pub mod select;
pub mod sort;
pub mod text;

pub use page::{Page, paginate};
pub use select::Select;
pub use sort::{SortBy, SortDirection, sort_by_key};
pub use text::{TextSearch, search, text_matches};

/// Narrow a collection by a categorical filter over an extracted key.
///
/// `Select::Any` is the identity; `Select::Only(v)` keeps exact matches.
pub fn narrow<T, V, F>(items: &[T], select: &Select<V>, key: F) -> Vec<T>
where
    T: Clone,
    V: PartialEq,
    F: Fn(&T) -> V,
{
    match select {
        Select::Any => items.to_vec(),
        Select::Only(_) => items
            .iter()
            .filter(|item| select.admits(&key(item)))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        group: &'static str,
    }

    impl TextSearch for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alpha Works".into(), group: "a" },
            Row { name: "Beta Labs".into(), group: "b" },
            Row { name: "alphabet Inc".into(), group: "a" },
            Row { name: "Gamma Corp".into(), group: "b" },
        ]
    }

    #[test]
    fn narrow_any_is_identity() {
        let items = rows();
        assert_eq!(narrow(&items, &Select::Any, |r: &Row| r.group), items);
    }

    #[test]
    fn narrow_only_keeps_exact_matches() {
        let items = rows();
        let out = narrow(&items, &Select::Only("a"), |r: &Row| r.group);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.group == "a"));
    }

    #[test]
    fn filters_commute() {
        let items = rows();
        let text_then_group = narrow(&search(&items, "alpha"), &Select::Only("a"), |r: &Row| r.group);
        let group_then_text = search(&narrow(&items, &Select::Only("a"), |r: &Row| r.group), "alpha");
        assert_eq!(text_then_group, group_then_text);
    }

    #[test]
    fn narrow_preserves_input_order() {
        let items = rows();
        let out = narrow(&items, &Select::Only("b"), |r: &Row| r.group);
        assert_eq!(out[0].name, "Beta Labs");
        assert_eq!(out[1].name, "Gamma Corp");
    }
}
