//! Catalog Integration Tests
//!
//! Tests for lookups on the built-in catalog and comparisons over custom
//! catalogs.

use uicompare::{
    Accessibility, BundleSize, Catalog, CatalogError, CompareOptions, Customization, LibraryRecord,
};

#[test]
fn test_builtin_records() {
    let catalog = Catalog::builtin();

    let radix = catalog.get("Radix UI").unwrap();
    assert_eq!(radix.accessibility, Accessibility::Excellent);
    assert_eq!(radix.customization, Customization::High);
    assert_eq!(radix.bundle_size, BundleSize::Moderate);
    assert_eq!(radix.ecosystem, "large");

    let ark = catalog.get("Ark UI").unwrap();
    assert_eq!(ark.customization, Customization::VeryHigh);
    assert_eq!(ark.ecosystem, "growing");
}

#[test]
fn test_keys_in_declaration_order() {
    let keys: Vec<&str> = Catalog::builtin().keys().collect();
    assert_eq!(keys, vec!["Radix UI", "Headless UI", "Ark UI"]);
}

#[test]
fn test_lookup_miss() {
    let result = Catalog::builtin().get("Bootstrap");
    assert_eq!(result, Err(CatalogError::NotFound("Bootstrap".to_string())));
}

#[test]
fn test_compare_custom_catalog() {
    let catalog = Catalog::from_records(vec![
        LibraryRecord::new(
            "Reach UI",
            Accessibility::Good,
            Customization::Moderate,
            BundleSize::Small,
            "maintenance",
        ),
        LibraryRecord::new(
            "Ariakit",
            Accessibility::Excellent,
            Customization::High,
            BundleSize::Moderate,
            "small",
        ),
    ])
    .unwrap();

    let summaries = catalog
        .compare(&["accessibility"], &CompareOptions::default())
        .unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].library, "Reach UI");
    assert_eq!(summaries[0].get("accessibility"), Some("good"));
    assert_eq!(summaries[1].get("accessibility"), Some("excellent"));

    let sorted = catalog
        .compare(&["accessibility"], &CompareOptions::sorted_by_name())
        .unwrap();
    assert_eq!(sorted[0].library, "Ariakit");
}

#[test]
fn test_empty_catalog_still_validates() {
    let catalog = Catalog::from_records(Vec::new()).unwrap();
    assert!(catalog.is_empty());

    let summaries = catalog
        .compare(&["ecosystem"], &CompareOptions::default())
        .unwrap();
    assert!(summaries.is_empty());

    let result = catalog.compare(&["stars"], &CompareOptions::default());
    assert!(matches!(result, Err(CatalogError::InvalidCriterion(_))));
}
