//! Comparison criteria.
//!
//! A criterion names one attribute of a library record. Only the four
//! attribute keys below are recognized; anything else is rejected.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Attribute key used to restrict a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Accessibility support
    Accessibility,

    /// How far components can be restyled and restructured
    Customization,

    /// Shipped bundle weight
    BundleSize,

    /// Surrounding ecosystem
    Ecosystem,
}

impl Criterion {
    /// All recognized criteria, in record field order
    pub const ALL: [Criterion; 4] = [
        Criterion::Accessibility,
        Criterion::Customization,
        Criterion::BundleSize,
        Criterion::Ecosystem,
    ];

    /// The attribute key for this criterion
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Accessibility => "accessibility",
            Criterion::Customization => "customization",
            Criterion::BundleSize => "bundle_size",
            Criterion::Ecosystem => "ecosystem",
        }
    }

    /// Parse a whole criteria list, failing on the first unrecognized key.
    ///
    /// An empty list is rejected before any key is looked at.
    pub fn parse_all<S: AsRef<str>>(criteria: &[S]) -> Result<Vec<Criterion>, CatalogError> {
        if criteria.is_empty() {
            return Err(CatalogError::EmptyCriteria);
        }

        criteria.iter().map(|c| c.as_ref().parse()).collect()
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Criterion {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidCriterion(s.to_string()))
    }
}
