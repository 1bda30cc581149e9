//! Domain models for the adoption catalog. These types stay plain data
//! holders so the catalog, router and views can share them without any of
//! those layers owning presentation rules they do not need.

use std::fmt;

/// Opaque reference to a photo asset. The renderer maps the key to an ASCII
/// placeholder; the catalog never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single adoptable dog. The `id` is the only key the router carries, so
/// it doubles as the entry's position inside the catalog.
pub struct CatalogEntry {
    /// Lookup key used by the detail route.
    pub id: usize,
    /// Display name. May contain non-ASCII characters ("Daiちゃん").
    pub name: String,
    /// Age in whole months.
    pub age_months: u32,
    /// Photo shown in both the list row and the detail page.
    pub image: ImageRef,
    /// Free-form location text.
    pub location: String,
}

impl CatalogEntry {
    pub fn new(
        id: usize,
        name: impl Into<String>,
        age_months: u32,
        image: ImageRef,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age_months,
            image,
            location: location.into(),
        }
    }

    /// Unit shown next to the age in list rows. Only an age of exactly one
    /// month is singular; zero months pluralizes too.
    pub fn age_unit(&self) -> &'static str {
        if self.age_months == 1 {
            "MONTH"
        } else {
            "MONTHS"
        }
    }

    /// `"5 MONTHS"` style label used by the list view.
    pub fn age_label(&self) -> String {
        format!("{} {}", self.age_months, self.age_unit())
    }

    /// Age and location as the single sentence shown on the detail page.
    pub fn summary(&self) -> String {
        format!("{} months old from {}", self.age_months, self.location)
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
