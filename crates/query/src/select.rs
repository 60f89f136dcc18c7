//! Categorical and tab filters as a tagged choice instead of magic strings.

use serde::{Deserialize, Serialize};

/// A categorical filter: either pass-through ("All") or exact match.
///
/// Status tabs use `Select` over the entity's status enum, so an invalid tab
/// value cannot be represented; open-ended categories use `Select<String>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Select<T> {
    /// No narrowing; admits every value.
    #[default]
    Any,
    /// Admits only values equal to the chosen one.
    Only(T),
}

impl<T: PartialEq> Select<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Select::Any => true,
            Select::Only(chosen) => chosen == value,
        }
    }
}

impl<T> Select<T> {
    /// Build from an optional user choice; absence means "All".
    pub fn from_choice(choice: Option<T>) -> Self {
        match choice {
            Some(value) => Select::Only(value),
            None => Select::Any,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Select::Any)
    }
}
