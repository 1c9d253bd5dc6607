//! Library comparison.
//!
//! A comparison restricts every catalog entry to the requested criteria.
//! Criteria are validated up front: an empty list or any unrecognized key
//! rejects the whole request, so no partial result is ever produced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::Criterion;
use crate::error::CatalogError;
use crate::library::Catalog;

/// Order of summaries in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Catalog declaration order
    #[default]
    Catalog,

    /// Library name, ascending
    Name,
}

/// Options for a comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    #[serde(default)]
    pub sort: SortOrder,
}

impl CompareOptions {
    /// Options that sort summaries by library name
    pub fn sorted_by_name() -> Self {
        Self {
            sort: SortOrder::Name,
        }
    }
}

/// One library's values for the requested criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Library name
    pub library: String,

    /// Criterion key -> value
    pub values: BTreeMap<String, String>,
}

impl Summary {
    /// Get the value for a criterion key, if it was requested
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Compare all libraries in `catalog` on `criteria`
pub fn compare<S: AsRef<str>>(
    catalog: &Catalog,
    criteria: &[S],
    options: &CompareOptions,
) -> Result<Vec<Summary>, CatalogError> {
    let parsed = Criterion::parse_all(criteria).inspect_err(|e| {
        warn!(error = %e, "Rejected comparison");
    })?;

    debug!(
        criteria = ?parsed,
        libraries = catalog.len(),
        sort = ?options.sort,
        "Comparing libraries"
    );

    let mut summaries: Vec<Summary> = catalog
        .iter()
        .map(|record| Summary {
            library: record.name.clone(),
            values: parsed
                .iter()
                .map(|c| (c.as_str().to_string(), record.value(*c)))
                .collect(),
        })
        .collect();

    if options.sort == SortOrder::Name {
        summaries.sort_by(|a, b| a.library.cmp(&b.library));
    }

    Ok(summaries)
}

/// Compare the built-in libraries on `criteria`, in declaration order
pub fn compare_libraries<S: AsRef<str>>(criteria: &[S]) -> Result<Vec<Summary>, CatalogError> {
    compare(Catalog::builtin(), criteria, &CompareOptions::default())
}

/// Compare the built-in libraries on `criteria` with explicit options
pub fn compare_libraries_with<S: AsRef<str>>(
    criteria: &[S],
    options: &CompareOptions,
) -> Result<Vec<Summary>, CatalogError> {
    compare(Catalog::builtin(), criteria, options)
}
