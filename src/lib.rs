//! Vision Forge - industry-tailored architecture blueprints as Mermaid source
//!
//! This library maps a free-text industry name and an operational-scale tier
//! ("Startup", "Growth", "Enterprise") to one of a set of pre-authored
//! architecture diagrams, returned as Mermaid source wrapped in a fenced code
//! block for downstream rendering.
//!
//! Resolution never fails: unmatched industries fall back to a generic entry
//! and unrecognized scale labels fall back to the Enterprise variant, so
//! arbitrary user text always produces a diagram.
//!
//! # Example
//!
//! ```rust
//! use vision_forge::resolve;
//!
//! let block = resolve("FinTech", "Growth");
//! assert!(block.starts_with("```mermaid\n"));
//! assert!(block.ends_with("\n```"));
//! ```

pub mod catalog;
pub mod resolver;

pub use catalog::{Catalog, CatalogEntry, CatalogError, ScaleTier, ScaleVariants};
pub use resolver::{fence, normalize_key, resolve_with, select};

/// Resolve an industry input and scale label against the built-in catalog
///
/// This is the main entry point for the library. It selects the catalog
/// entry whose key best matches the industry text, picks the variant for the
/// scale label, and wraps it in a mermaid code fence.
///
/// # Example
///
/// ```rust
/// use vision_forge::resolve;
///
/// // Unmatched industries still produce a diagram
/// let block = resolve("underwater basket weaving", "Startup");
/// assert!(block.contains("flowchart"));
/// ```
pub fn resolve(industry_input: &str, scale: &str) -> String {
    resolver::resolve_with(Catalog::builtin(), industry_input, scale)
}
