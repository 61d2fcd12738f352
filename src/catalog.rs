//! Blueprint catalog: ordered industry entries, each with three per-scale
//! diagram variants.
//!
//! The built-in catalog is embedded in the binary at compile time and is
//! never mutated after construction. Custom catalogs can be loaded from TOML
//! files with the same shape.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Industry keys must be non-empty lowercase ASCII letters
    #[error("invalid industry key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("duplicate industry key: {0}")]
    DuplicateKey(String),

    /// Every catalog needs a "generic" entry to fall back on
    #[error("catalog has no \"generic\" fallback entry")]
    MissingFallback,
}

/// One of the three fixed operational-scale tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleTier {
    Startup,
    Growth,
    Enterprise,
}

impl ScaleTier {
    /// Parse an exact tier label.
    ///
    /// Returns `None` for anything else; resolution falls back to
    /// [`ScaleTier::Enterprise`] rather than rejecting the input.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Startup" => Some(Self::Startup),
            "Growth" => Some(Self::Growth),
            "Enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }

    /// Returns the canonical label for this tier
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "Startup",
            Self::Growth => "Growth",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Returns all tiers in display order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Startup, Self::Growth, Self::Enterprise]
    }
}

impl fmt::Display for ScaleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three diagram-source variants of one catalog entry
///
/// All three fields are required, so a deserialized entry can never be
/// missing a variant.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleVariants {
    pub startup: String,
    pub growth: String,
    pub enterprise: String,
}

impl ScaleVariants {
    /// Get the diagram source for a tier
    pub fn get(&self, tier: ScaleTier) -> &str {
        match tier {
            ScaleTier::Startup => &self.startup,
            ScaleTier::Growth => &self.growth,
            ScaleTier::Enterprise => &self.enterprise,
        }
    }
}

/// One industry's set of diagram variants
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Matching key: non-empty lowercase ASCII letters, unique in the catalog
    pub industry: String,
    pub variants: ScaleVariants,
}

impl CatalogEntry {
    /// Get the diagram source for a tier
    pub fn variant(&self, tier: ScaleTier) -> &str {
        self.variants.get(tier)
    }
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    entries: Vec<CatalogEntry>,
}

/// An ordered, immutable catalog with a generic fallback entry
///
/// Entry order is semantically significant: industry matching scans entries
/// in declaration order and the first match wins.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    fallback: CatalogEntry,
}

impl Catalog {
    /// The built-in catalog embedded at compile time
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    ///
    /// The entry keyed `generic` becomes the fallback; the remaining entries
    /// keep their declaration order.
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;
        Self::from_entries(parsed.entries)
    }

    /// Build a catalog from a flat entry list, validating keys and splitting
    /// out the `generic` fallback
    pub fn from_entries(all: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();
        let mut fallback = None;
        let mut seen: Vec<String> = Vec::new();

        for entry in all {
            validate_key(&entry.industry)?;
            if seen.iter().any(|k| k == &entry.industry) {
                return Err(CatalogError::DuplicateKey(entry.industry));
            }
            seen.push(entry.industry.clone());

            if entry.industry == FALLBACK_KEY {
                fallback = Some(entry);
            } else {
                entries.push(entry);
            }
        }

        let fallback = fallback.ok_or(CatalogError::MissingFallback)?;
        Ok(Self { entries, fallback })
    }

    /// The matchable entries, in declaration order (fallback excluded)
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The generic fallback entry
    pub fn fallback(&self) -> &CatalogEntry {
        &self.fallback
    }

    /// All industry keys, matchable entries first, fallback last
    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|e| e.industry.as_str())
            .chain(std::iter::once(self.fallback.industry.as_str()))
    }
}

/// Key of the entry used when no industry matches
pub const FALLBACK_KEY: &str = "generic";

fn validate_key(key: &str) -> Result<(), CatalogError> {
    if key.is_empty() {
        return Err(CatalogError::InvalidKey {
            key: key.to_string(),
            reason: "key is empty",
        });
    }
    if !key.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(CatalogError::InvalidKey {
            key: key.to_string(),
            reason: "key must contain only lowercase ASCII letters",
        });
    }
    Ok(())
}

/// The built-in catalog, constructed once per process
///
/// Declaration order matters: matching is first-match-wins, and inputs that
/// normalize to the empty string land on whichever entry is first.
static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = vec![
        builtin_entry(
            "fintech",
            include_str!("../templates/fintech-startup.mmd"),
            include_str!("../templates/fintech-growth.mmd"),
            include_str!("../templates/fintech-enterprise.mmd"),
        ),
        builtin_entry(
            "healthtech",
            include_str!("../templates/healthtech-startup.mmd"),
            include_str!("../templates/healthtech-growth.mmd"),
            include_str!("../templates/healthtech-enterprise.mmd"),
        ),
        builtin_entry(
            "ecommerce",
            include_str!("../templates/ecommerce-startup.mmd"),
            include_str!("../templates/ecommerce-growth.mmd"),
            include_str!("../templates/ecommerce-enterprise.mmd"),
        ),
        builtin_entry(
            "saas",
            include_str!("../templates/saas-startup.mmd"),
            include_str!("../templates/saas-growth.mmd"),
            include_str!("../templates/saas-enterprise.mmd"),
        ),
        builtin_entry(
            "logistics",
            include_str!("../templates/logistics-startup.mmd"),
            include_str!("../templates/logistics-growth.mmd"),
            include_str!("../templates/logistics-enterprise.mmd"),
        ),
        builtin_entry(
            "edtech",
            include_str!("../templates/edtech-startup.mmd"),
            include_str!("../templates/edtech-growth.mmd"),
            include_str!("../templates/edtech-enterprise.mmd"),
        ),
        builtin_entry(
            FALLBACK_KEY,
            include_str!("../templates/generic-startup.mmd"),
            include_str!("../templates/generic-growth.mmd"),
            include_str!("../templates/generic-enterprise.mmd"),
        ),
    ];
    Catalog::from_entries(entries).expect("Built-in catalog should be valid")
});

fn builtin_entry(industry: &str, startup: &str, growth: &str, enterprise: &str) -> CatalogEntry {
    CatalogEntry {
        industry: industry.to_string(),
        variants: ScaleVariants {
            startup: startup.to_string(),
            growth: growth.to_string(),
            enterprise: enterprise.to_string(),
        },
    }
}
