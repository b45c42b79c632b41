//! Caller-supplied product catalog.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::error::ExtractError;
use crate::normalize::fold_name;

/// Keys the flat result object reserves for itself.
pub const RESERVED_KEYS: [&str; 2] = ["flag", "reason"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    /// Position in the deduplicated catalog.
    pub position: usize,
    pub folded: Vec<char>,
}

impl CatalogEntry {
    /// Name length in characters, used for match priority.
    #[must_use]
    pub fn len(&self) -> usize {
        self.name.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Deduplicated, validated catalog in caller order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, collapsing repeated names onto their first position.
    ///
    /// # Errors
    /// Fails on an empty catalog, on names with nothing to match, and on names
    /// that collide with the reserved result keys.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, ExtractError> {
        if names.is_empty() {
            return Err(ExtractError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if !seen.insert(name) {
                continue;
            }
            if RESERVED_KEYS.contains(&name) {
                return Err(ExtractError::ReservedProductName(name.to_string()));
            }
            let folded = fold_name(name);
            if folded.is_empty() {
                return Err(ExtractError::MalformedProduct {
                    position: index,
                    name: name.to_string(),
                });
            }
            entries.push(CatalogEntry {
                name: name.to_string(),
                position: entries.len(),
                folded,
            });
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered longest name first, ties broken by catalog position.
    #[must_use]
    pub fn by_priority(&self) -> Vec<&CatalogEntry> {
        let mut ordered: Vec<&CatalogEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| (Reverse(entry.len()), entry.position));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_to_first_position() {
        let catalog = Catalog::new(&["b", "a", "b"]).unwrap_or_else(|e| panic!("{e}"));
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(catalog.entries()[1].position, 1);
    }

    #[test]
    fn priority_is_longest_first_then_catalog_order() {
        let catalog = Catalog::new(&["iPhone 16", "Pixel 9", "iPhone 16 Pro", "Galaxy S"])
            .unwrap_or_else(|e| panic!("{e}"));
        let names: Vec<&str> = catalog
            .by_priority()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["iPhone 16 Pro", "iPhone 16", "Galaxy S", "Pixel 9"]);
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(
            Catalog::new::<&str>(&[]).err(),
            Some(ExtractError::EmptyCatalog)
        );
        assert_eq!(
            Catalog::new(&["ok", "---"]).err(),
            Some(ExtractError::MalformedProduct {
                position: 1,
                name: "---".to_string()
            })
        );
        assert_eq!(
            Catalog::new(&["flag"]).err(),
            Some(ExtractError::ReservedProductName("flag".to_string()))
        );
    }
}
