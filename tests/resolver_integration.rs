//! Integration tests for the Vision Forge resolver public API

use std::path::Path;

use pretty_assertions::assert_eq;

use vision_forge::{fence, resolve, resolve_with, select, Catalog, ScaleTier};

#[test]
fn test_exact_key_returns_variant_unmodified_except_fence() {
    let catalog = Catalog::builtin();
    for entry in catalog.entries() {
        for tier in ScaleTier::all() {
            let block = resolve(&entry.industry, tier.label());
            assert_eq!(block, fence(entry.variant(*tier)));
        }
    }
}

#[test]
fn test_fintech_growth_example() {
    let block = resolve("FinTech", "Growth");
    let expected = fence(
        Catalog::builtin()
            .entries()
            .iter()
            .find(|e| e.industry == "fintech")
            .expect("fintech is a built-in industry")
            .variant(ScaleTier::Growth),
    );
    assert_eq!(block, expected);
    assert!(block.contains("Fraud Scoring"));
}

#[test]
fn test_fence_shape() {
    let block = resolve("ecommerce", "Startup");
    assert_eq!(block.lines().next(), Some("```mermaid"));
    assert_eq!(block.lines().last(), Some("```"));
}

#[test]
fn test_abbreviated_and_verbose_inputs_match_same_entry() {
    let catalog = Catalog::builtin();
    assert_eq!(select(catalog, "fin").industry, "fintech");
    assert_eq!(select(catalog, "FinTech Solutions GmbH").industry, "fintech");
    assert_eq!(select(catalog, "e-commerce").industry, "ecommerce");
    assert_eq!(select(catalog, "log").industry, "logistics");
}

#[test]
fn test_unmatched_industry_uses_generic_fallback() {
    let catalog = Catalog::builtin();
    assert_eq!(select(catalog, "xyz").industry, "generic");
    let block = resolve("xyz", "Growth");
    assert_eq!(block, fence(catalog.fallback().variant(ScaleTier::Growth)));
}

#[test]
fn test_unknown_scale_uses_enterprise_variant() {
    assert_eq!(resolve("healthtech", "Unknown"), resolve("healthtech", "Enterprise"));
    assert_eq!(resolve("healthtech", ""), resolve("healthtech", "Enterprise"));
    // Tier labels are exact; lowercase is not recognized
    assert_eq!(resolve("healthtech", "growth"), resolve("healthtech", "Enterprise"));
}

#[test]
fn test_empty_industry_picks_first_entry() {
    // The empty normalized key is a substring of every entry key, so the
    // first catalog entry wins
    let catalog = Catalog::builtin();
    let first = &catalog.entries()[0];
    assert_eq!(first.industry, "fintech");
    assert_eq!(resolve("", "Startup"), fence(first.variant(ScaleTier::Startup)));
}

#[test]
fn test_resolution_is_idempotent() {
    let a = resolve("Quantum Computing", "Growth");
    let b = resolve("Quantum Computing", "Growth");
    assert_eq!(a, b);
}

#[test]
fn test_custom_catalog_from_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/agency-catalog.toml");
    let catalog = Catalog::from_file(&path).expect("Fixture catalog should load");

    let keys: Vec<&str> = catalog.industries().collect();
    assert_eq!(keys, vec!["gaming", "generic"]);

    // Verbose input matches the custom entry
    assert_eq!(select(&catalog, "Cloud Gaming").industry, "gaming");
    let block = resolve_with(&catalog, "Cloud Gaming", "Growth");
    assert!(block.starts_with("```mermaid\n"));
    assert!(block.contains("Matchmaking"));

    // Built-in industries are not in the custom catalog
    assert_eq!(select(&catalog, "fintech").industry, "generic");
}
