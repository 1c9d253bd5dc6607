//! Catalog of headless UI libraries.
//!
//! The built-in catalog is created once on first use and never mutated.
//! Custom catalogs can be built from records (for example from a config
//! file) and are equally read-only once constructed.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::core::comparator::{self, CompareOptions, Summary};
use crate::domain::{Accessibility, BundleSize, Customization, LibraryRecord};
use crate::error::CatalogError;

/// Global built-in catalog
static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Read-only catalog of library records, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<LibraryRecord>,
}

impl Catalog {
    /// The shared built-in catalog
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| Catalog {
            items: builtin_records(),
        })
    }

    /// Build a catalog from records, keeping their order.
    ///
    /// Library names must be unique.
    pub fn from_records(
        records: impl IntoIterator<Item = LibraryRecord>,
    ) -> Result<Self, CatalogError> {
        let mut items: Vec<LibraryRecord> = Vec::new();

        for record in records {
            if items.iter().any(|i| i.name == record.name) {
                return Err(CatalogError::DuplicateLibrary(record.name));
            }
            items.push(record);
        }

        debug!(libraries = items.len(), "Built catalog");
        Ok(Self { items })
    }

    /// Get a record by library name (exact match)
    pub fn get(&self, name: &str) -> Result<&LibraryRecord, CatalogError> {
        self.items
            .iter()
            .find(|i| i.name == name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Check whether a library is present
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    /// Library names in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.name.as_str())
    }

    /// Library names in declaration order, collected
    pub fn names(&self) -> Vec<&str> {
        self.keys().collect()
    }

    /// All records in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &LibraryRecord> {
        self.items.iter()
    }

    /// Compare every library in this catalog on the given criteria
    pub fn compare<S: AsRef<str>>(
        &self,
        criteria: &[S],
        options: &CompareOptions,
    ) -> Result<Vec<Summary>, CatalogError> {
        comparator::compare(self, criteria, options)
    }

    /// Get the number of libraries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn builtin_records() -> Vec<LibraryRecord> {
    vec![
        LibraryRecord::new(
            "Radix UI",
            Accessibility::Excellent,
            Customization::High,
            BundleSize::Moderate,
            "large",
        ),
        LibraryRecord::new(
            "Headless UI",
            Accessibility::Excellent,
            Customization::High,
            BundleSize::Small,
            "tailwind-focused",
        ),
        LibraryRecord::new(
            "Ark UI",
            Accessibility::Excellent,
            Customization::VeryHigh,
            BundleSize::Moderate,
            "growing",
        ),
    ]
}
