//! Library records and their qualitative attributes.

use serde::{Deserialize, Serialize};

use super::criterion::Criterion;

/// Accessibility rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl std::fmt::Display for Accessibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accessibility::Poor => write!(f, "poor"),
            Accessibility::Fair => write!(f, "fair"),
            Accessibility::Good => write!(f, "good"),
            Accessibility::Excellent => write!(f, "excellent"),
        }
    }
}

/// Customization level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Customization {
    Low,
    Moderate,
    High,
    #[serde(rename = "very high", alias = "very-high", alias = "very_high")]
    VeryHigh,
}

impl std::fmt::Display for Customization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Customization::Low => write!(f, "low"),
            Customization::Moderate => write!(f, "moderate"),
            Customization::High => write!(f, "high"),
            Customization::VeryHigh => write!(f, "very high"),
        }
    }
}

/// Bundle size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleSize {
    Small,
    Moderate,
    Large,
}

impl std::fmt::Display for BundleSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleSize::Small => write!(f, "small"),
            BundleSize::Moderate => write!(f, "moderate"),
            BundleSize::Large => write!(f, "large"),
        }
    }
}

/// A single library in the catalog.
///
/// Every field is required, so a partial record can neither be built nor
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRecord {
    /// Library name (unique within a catalog)
    pub name: String,

    pub accessibility: Accessibility,

    pub customization: Customization,

    pub bundle_size: BundleSize,

    /// Free-text ecosystem descriptor
    pub ecosystem: String,
}

impl LibraryRecord {
    /// Create a new library record
    pub fn new(
        name: impl Into<String>,
        accessibility: Accessibility,
        customization: Customization,
        bundle_size: BundleSize,
        ecosystem: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            accessibility,
            customization,
            bundle_size,
            ecosystem: ecosystem.into(),
        }
    }

    /// The record's value for a criterion, as displayed in comparisons
    pub fn value(&self, criterion: Criterion) -> String {
        match criterion {
            Criterion::Accessibility => self.accessibility.to_string(),
            Criterion::Customization => self.customization.to_string(),
            Criterion::BundleSize => self.bundle_size.to_string(),
            Criterion::Ecosystem => self.ecosystem.clone(),
        }
    }
}
