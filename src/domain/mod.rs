//! Domain types for library comparison.
//!
//! These are the core data structures shared by the catalog and the
//! comparator.

pub mod criterion;
pub mod record;

pub use criterion::Criterion;
pub use record::{Accessibility, BundleSize, Customization, LibraryRecord};
