//! The user-chosen subset of `name` values to include.

use std::collections::BTreeSet;

use serde::Serialize;

use dash_model::COL_NAME;
use dash_validate::ValidatedTable;

/// A subset of the distinct `name` values of the current table.
///
/// Defaults to the full distinct set at load time and must be rebuilt for
/// every new upload; a selection never outlives the table it was computed
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    names: BTreeSet<String>,
}

impl FilterSelection {
    /// The default selection: every distinct `name` in the table.
    pub fn full_for(table: &ValidatedTable) -> Self {
        Self {
            names: table.raw().distinct_strings(COL_NAME),
        }
    }

    /// Build a selection from requested names, keeping only values that
    /// actually occur in the table. Unknown names are dropped silently;
    /// they cannot match any row anyway.
    pub fn from_names<I>(requested: I, table: &ValidatedTable) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let available = table.raw().distinct_strings(COL_NAME);
        let names = requested
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| available.contains(name))
            .collect();
        Self { names }
    }

    /// A selection matching nothing. Yields empty outputs, not an error.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_ingest::RawTable;
    use dash_validate::validate;
    use polars::prelude::df;

    fn table() -> ValidatedTable {
        let data = df! {
            "name" => ["alice", "bob", "alice"],
            "camp_name" => ["spring", "spring", "winter"],
            "action_date" => ["2024-01-01", "2024-01-01", "2024-01-02"],
            "Total_Order" => [10i64, 20, 30],
            "Total_Payout" => [1i64, 2, 3],
        }
        .unwrap();
        validate(RawTable::new("upload.csv", data)).unwrap()
    }

    #[test]
    fn full_selection_covers_distinct_names() {
        let selection = FilterSelection::full_for(&table());
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("alice"));
        assert!(selection.contains("bob"));
    }

    #[test]
    fn unknown_names_are_dropped() {
        let selection = FilterSelection::from_names(
            ["alice".to_string(), "mallory".to_string()],
            &table(),
        );
        assert_eq!(selection.len(), 1);
        assert!(!selection.contains("mallory"));
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let selection = FilterSelection::empty();
        assert!(selection.is_empty());
        assert!(!selection.contains("alice"));
    }
}
