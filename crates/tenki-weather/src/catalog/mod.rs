//! Static location catalogs.
//!
//! Each catalog is a slice sorted ascending by id with unique ids. Lookups
//! binary-search the slice; the ordering is checked by tests, not at runtime.

pub mod cities;
pub mod jma_areas;

pub use cities::{City, CITIES};
pub use jma_areas::{center_of, Area, CENTERS, OFFICES};

use crate::error::WeatherError;

/// A row in a location catalog.
pub trait CatalogEntry: 'static {
    fn id(&self) -> &'static str;
    fn display_name(&self) -> &'static str;
    /// Prefecture name or parent area id, depending on the catalog
    fn parent_region(&self) -> &'static str;

    /// Text shown for this entry in a selection dropdown
    fn option_label(&self) -> String {
        self.display_name().to_string()
    }
}

#[derive(Debug)]
pub struct Catalog<T: 'static> {
    kind: &'static str,
    entries: &'static [T],
}

impl<T: 'static> Catalog<T> {
    pub const fn new(kind: &'static str, entries: &'static [T]) -> Self {
        Self { kind, entries }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending id order
    pub fn iter(&self) -> std::slice::Iter<'static, T> {
        self.entries.iter()
    }
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn lookup(&self, id: &str) -> Result<&'static T, WeatherError> {
        let entries = self.entries;
        entries
            .binary_search_by(|entry| entry.id().cmp(id))
            .map(|index| &entries[index])
            .map_err(|_| WeatherError::not_found(self.kind, id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_ok()
    }

    /// `(id, label)` pairs for populating a settings dropdown
    pub fn options(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|entry| (entry.id(), entry.option_label()))
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn assert_sorted_unique<T: CatalogEntry>(catalog: &Catalog<T>) {
    let ids: Vec<&str> = catalog.iter().map(CatalogEntry::id).collect();
    for pair in ids.windows(2) {
        assert!(
            pair[0] < pair[1],
            "{} catalog out of order or duplicated at {} / {}",
            catalog.kind(),
            pair[0],
            pair[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row(&'static str, &'static str);

    impl CatalogEntry for Row {
        fn id(&self) -> &'static str {
            self.0
        }
        fn display_name(&self) -> &'static str {
            self.1
        }
        fn parent_region(&self) -> &'static str {
            ""
        }
    }

    static ROWS: Catalog<Row> = Catalog::new("row", &[Row("01", "a"), Row("05", "b"), Row("09", "c")]);

    #[test]
    fn test_lookup_hit_and_miss() {
        assert_eq!(ROWS.lookup("05").unwrap().display_name(), "b");
        let err = ROWS.lookup("04").unwrap_err();
        assert!(matches!(err, WeatherError::NotFound { kind: "row", .. }));
    }

    #[test]
    fn test_options_keep_order() {
        let ids: Vec<&str> = ROWS.options().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["01", "05", "09"]);
        assert_sorted_unique(&ROWS);
    }
}
