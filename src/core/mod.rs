//! Comparison logic.
//!
//! This module contains:
//! - Comparator: restricts catalog entries to requested criteria
//! - Render: text table and JSON output for comparisons

pub mod comparator;
pub mod render;

pub use comparator::{
    compare, compare_libraries, compare_libraries_with, CompareOptions, SortOrder, Summary,
};
pub use render::{render_json, render_table};
