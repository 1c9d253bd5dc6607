//! Configuration for comparisons.
//!
//! A config document can set comparison options and, optionally, replace
//! the built-in catalog with custom libraries:
//!
//! ```yaml
//! version: "1"
//! compare:
//!   sort: name
//! libraries:
//!   - name: Example UI
//!     accessibility: good
//!     customization: moderate
//!     bundle_size: large
//!     ecosystem: niche
//! ```
//!
//! Without a `libraries` list the built-in catalog is used.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::core::CompareOptions;
use crate::domain::LibraryRecord;
use crate::library::Catalog;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub compare: CompareOptions,
    #[serde(default)]
    pub libraries: Vec<LibraryRecord>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Options applied to comparisons
    pub options: CompareOptions,
    /// Catalog to compare (built-in unless the config lists libraries)
    pub catalog: Cow<'static, Catalog>,
}

impl ResolvedConfig {
    /// Whether the built-in catalog is in use
    pub fn uses_builtin_catalog(&self) -> bool {
        matches!(self.catalog, Cow::Borrowed(_))
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            options: CompareOptions::default(),
            catalog: Cow::Borrowed(Catalog::builtin()),
        }
    }
}

/// Parse and resolve a YAML config document
pub fn load_config_str(content: &str) -> Result<ResolvedConfig> {
    let config: ConfigFile =
        serde_yaml::from_str(content).context("Failed to parse config YAML")?;
    resolve(config)
}

/// Read, parse and resolve a YAML config file
pub fn load_config(path: &Path) -> Result<ResolvedConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    resolve(config)
}

fn resolve(config: ConfigFile) -> Result<ResolvedConfig> {
    let catalog = if config.libraries.is_empty() {
        Cow::Borrowed(Catalog::builtin())
    } else {
        Cow::Owned(Catalog::from_records(config.libraries).context("Invalid library list")?)
    };

    debug!(
        version = %config.version,
        sort = ?config.compare.sort,
        libraries = catalog.len(),
        "Resolved config"
    );

    Ok(ResolvedConfig {
        options: config.compare,
        catalog,
    })
}
