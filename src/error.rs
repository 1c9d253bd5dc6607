//! Errors surfaced by catalog lookups and comparisons.

use thiserror::Error;

/// Catalog and comparison errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Invalid criterion: {0}")]
    InvalidCriterion(String),

    #[error("No criteria given for comparison")]
    EmptyCriteria,

    #[error("Library not found: {0}")]
    NotFound(String),

    #[error("Duplicate library in catalog: {0}")]
    DuplicateLibrary(String),
}
