//! uicompare - Compare headless UI component libraries
//!
//! A static catalog of headless UI libraries (Radix UI, Headless UI,
//! Ark UI) and a pure comparison over a chosen set of criteria.
//!
//! # Modules
//!
//! - `domain`: Data structures (LibraryRecord, Criterion, attribute ratings)
//! - `library`: The read-only catalog
//! - `core`: Comparison and rendering
//! - `config`: YAML configuration (options, custom catalogs)
//!
//! # Usage
//!
//! ```ignore
//! let summaries = uicompare::compare_libraries(&["accessibility", "bundle_size"])?;
//! for summary in &summaries {
//!     println!("{}: {:?}", summary.library, summary.values);
//! }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod library;

// Re-export main types at crate root for convenience
pub use core::{
    compare_libraries, compare_libraries_with, render_json, render_table, CompareOptions,
    SortOrder, Summary,
};
pub use domain::{Accessibility, BundleSize, Criterion, Customization, LibraryRecord};
pub use error::CatalogError;
pub use library::Catalog;
