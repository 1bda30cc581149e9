//! The fixed, in-memory adoption catalog.

use std::collections::HashSet;
use std::slice;

use thiserror::Error;

use crate::models::{CatalogEntry, ImageRef};

/// Failures raised while building or querying a [`Catalog`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no catalog entry with id {id}")]
    NotFound { id: usize },
    #[error("duplicate catalog id {id}")]
    DuplicateId { id: usize },
    #[error("catalog entry {id} sits at position {position}")]
    MisplacedId { id: usize, position: usize },
    #[error("catalog entry {id} has a blank name")]
    BlankName { id: usize },
}

/// Ordered, read-only list of adoptable dogs. Built once at startup and
/// handed to the UI by value; there are no mutation operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate and wrap `entries`. Every id must be unique and equal to the
    /// entry's position so that `get` is a direct index.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId { id: entry.id });
            }
            if entry.id != position {
                return Err(CatalogError::MisplacedId {
                    id: entry.id,
                    position,
                });
            }
            if entry.name.trim().is_empty() {
                return Err(CatalogError::BlankName { id: entry.id });
            }
        }
        Ok(Self { entries })
    }

    /// The built-in catalog shipped with the application.
    pub fn shibas() -> Self {
        const SHIBAS: &[(&str, u32, &str, &str)] = &[
            ("Kotaro", 5, "kota", "Tokyo, Japan"),
            ("Fukuchan", 1, "fuku", "Chiba, Japan"),
            ("Mametaro", 2, "mame", "Fukuoka, Japan"),
            ("Daiちゃん", 5, "dai", "Osaka, Japan"),
            ("Hanaちゃん", 8, "hana", "Gifu, Japan"),
            ("Sakura", 16, "sakura", "Nagoya, Japan"),
            ("Tsumoji", 6, "tsumoji", "Moon, Space"),
            ("Yuri", 12, "yuri", "Nagano, Japan"),
            ("Yumopiyo", 9, "yumopiyo", "Nagoya, Japan"),
            ("Shiroi", 5, "kota", "Aomori, Japan"),
            ("Melonpan", 1, "fuku", "Sapporo, Japan"),
            ("Taiyaki", 2, "mame", "Kawaguchiko, Japan"),
            ("Smol Bean", 5, "dai", "Hakone, Japan"),
            ("Mofupiyo", 8, "hana", "Morioka, Japan"),
            ("Penちゃん", 16, "sakura", "Akita, Japan"),
            ("Wanちゃん", 6, "tsumoji", "Nikko, Japan"),
            ("Yuki", 12, "yuri", "Fukushima, Japan"),
            ("Kuu", 9, "yumopiyo", "Kobe, Japan"),
        ];

        let entries = SHIBAS
            .iter()
            .enumerate()
            .map(|(id, &(name, age, image, location))| {
                CatalogEntry::new(id, name, age, ImageRef::new(image), location)
            })
            .collect();
        Self { entries }
    }

    /// Resolve an entry by id.
    pub fn get(&self, id: usize) -> Result<&CatalogEntry, CatalogError> {
        self.entries.get(id).ok_or(CatalogError::NotFound { id })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: usize, name: &str) -> CatalogEntry {
        CatalogEntry::new(id, name, 3, ImageRef::new("kota"), "Tokyo, Japan")
    }

    #[test]
    fn lookup_round_trips_every_entry() {
        let catalog = Catalog::shibas();
        for entry in &catalog {
            assert_eq!(catalog.get(entry.id), Ok(entry));
        }
    }

    #[test]
    fn builtin_ids_are_distinct() {
        let catalog = Catalog::shibas();
        let ids: HashSet<usize> = catalog.iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 18);
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let entries = Catalog::shibas().entries().to_vec();
        assert!(Catalog::new(entries).is_ok());
    }

    #[test]
    fn known_entries_match_the_source_data() {
        let catalog = Catalog::shibas();

        let dai = catalog.get(3).unwrap();
        assert_eq!(dai.name, "Daiちゃん");
        assert_eq!(dai.age_months, 5);
        assert_eq!(dai.location, "Osaka, Japan");
        assert_eq!(dai.image.key(), "dai");

        let kuu = catalog.get(17).unwrap();
        assert_eq!(kuu.name, "Kuu");
        assert_eq!(kuu.location, "Kobe, Japan");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = Catalog::shibas();
        assert_eq!(catalog.get(18), Err(CatalogError::NotFound { id: 18 }));
        assert_eq!(
            catalog.get(18).unwrap_err().to_string(),
            "no catalog entry with id 18"
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![entry(0, "Kotaro"), entry(0, "Fukuchan")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId { id: 0 });
    }

    #[test]
    fn ids_must_match_positions() {
        let err = Catalog::new(vec![entry(1, "Kotaro")]).unwrap_err();
        assert_eq!(err, CatalogError::MisplacedId { id: 1, position: 0 });
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = Catalog::new(vec![entry(0, "  ")]).unwrap_err();
        assert_eq!(err, CatalogError::BlankName { id: 0 });
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), Err(CatalogError::NotFound { id: 0 }));
    }
}
