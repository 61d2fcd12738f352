//! Industry matching and fenced-output formatting
//!
//! Resolution is total: every input, including the empty string, resolves to
//! some diagram. Unmatched industries take the generic fallback entry and
//! unrecognized scale labels take the Enterprise variant, so there is no
//! error type here.

use crate::catalog::{Catalog, CatalogEntry, ScaleTier};

/// Reduce arbitrary user text to a lowercase-alphabetic matching key
///
/// Lowercases the input, then strips every character that is not a lowercase
/// ASCII letter. `"FinTech 2.0"` becomes `"fintech"`.
pub fn normalize_key(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Select the catalog entry for an industry input
///
/// Scans entries in declaration order and picks the first whose key is a
/// substring of the normalized input, or of which the normalized input is a
/// substring. Both directions are checked so that abbreviated input ("fin")
/// and verbose input ("fintech-solutions") both match "fintech". No match
/// falls back to the generic entry.
///
/// An empty normalized key is a substring of every entry key, so it selects
/// the first entry. That is an accident of substring matching, not a
/// tie-break policy; callers should not rely on it for anything beyond
/// "some diagram always comes back".
pub fn select<'a>(catalog: &'a Catalog, industry_input: &str) -> &'a CatalogEntry {
    let key = normalize_key(industry_input);
    catalog
        .entries()
        .iter()
        .find(|entry| key.contains(&entry.industry) || entry.industry.contains(&key))
        .unwrap_or_else(|| catalog.fallback())
}

/// Resolve an industry input and scale label against a catalog
///
/// The scale label must be one of the exact tier labels; anything else takes
/// the Enterprise variant of the selected entry. The result is the diagram
/// source wrapped in a mermaid code fence.
pub fn resolve_with(catalog: &Catalog, industry_input: &str, scale: &str) -> String {
    let entry = select(catalog, industry_input);
    let tier = ScaleTier::parse(scale).unwrap_or(ScaleTier::Enterprise);
    fence(entry.variant(tier))
}

/// Wrap diagram source in a mermaid-tagged code fence
///
/// Opening and closing fences sit on their own lines. Embedded template
/// files end in a newline while caller-supplied sources may not; either way
/// exactly one newline separates the body from the closing fence.
pub fn fence(source: &str) -> String {
    let body = source.strip_suffix('\n').unwrap_or(source);
    format!("```mermaid\n{body}\n```")
}
