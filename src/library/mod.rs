//! Library catalog management.
//!
//! The catalog holds one record per headless UI library:
//!
//! ```text
//! Radix UI     accessibility, customization, bundle_size, ecosystem
//! Headless UI  ...
//! Ark UI       ...
//! ```

pub mod catalog;

pub use catalog::Catalog;
