//! Variant composition: base configuration + per-variant overrides.
//!
//! A [`Variant`] names one deployment target (e.g. "root", "subpath")
//! and carries a partial override of the base [`SiteConfig`] plus
//! integration add/remove lists. [`compose`] merges and re-validates;
//! [`compose_all`] runs independent variants in parallel.
//!
//! # Merge rules
//!
//! | Field kind     | Rule                                          |
//! |----------------|-----------------------------------------------|
//! | scalar/list    | last-writer-wins per field (no deep merge)    |
//! | integrations   | base order, then added order, then removals   |
//!
//! Composition is deterministic: the same `(base, variant)` pair always
//! yields a byte-identical result. On validation failure no
//! configuration is produced.

use crate::schema::{IntegrationSpec, SiteConfig, SocialLink};
use crate::sidebar::SidebarNode;
use crate::types::{ConfigDiagnostics, ConfigError, FieldPath};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Variant
// ============================================================================

/// A named deployment target with a partial override of the base
/// configuration.
///
/// Absent fields (`None`) keep the base value; present fields replace
/// it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    /// Variant name (e.g. "root", "subpath").
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<Vec<SocialLink>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Vec<SidebarNode>>,

    /// Integrations appended after the base set, in declaration order.
    pub add_integrations: Vec<IntegrationSpec>,

    /// Integration names dropped from the merged set.
    pub remove_integrations: Vec<String>,
}

impl Variant {
    /// Empty override for the named target.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a variant specification from TOML text.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let variant = toml::from_str(content)?;
        Ok(variant)
    }

    /// Parse TOML text, collecting any unknown field paths.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let variant = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((variant, ignored))
    }
}

// ============================================================================
// compose
// ============================================================================

/// Merge `variant` onto `base` and validate the result.
///
/// Field overrides are last-writer-wins. Integrations keep base order
/// first, then added order; removals then apply to the combined list.
/// On any validation failure the errors come back and no configuration
/// is produced.
pub fn compose(base: &SiteConfig, variant: &Variant) -> Result<SiteConfig, ConfigDiagnostics> {
    let mut diag = ConfigDiagnostics::new();
    let mut merged = base.clone();

    apply_option(&mut merged.site_url, variant.site_url.as_ref());
    apply_option(&mut merged.base_path, variant.base_path.as_ref());
    apply_option(&mut merged.title, variant.title.as_ref());
    apply_option(&mut merged.social, variant.social.as_ref());
    apply_option(&mut merged.sidebar, variant.sidebar.as_ref());
    if let Some(logo) = &variant.logo {
        merged.logo = Some(logo.clone());
    }

    merged.integrations = merge_integrations(&base.integrations, variant, &mut diag);

    merged.validate_into(&mut diag);
    diag.print_warnings();
    diag.into_result().map(|()| merged)
}

/// Compose every variant against the same base.
///
/// Variants are independent, so they run in parallel; one variant's
/// failure never affects another's success. Results keep the input
/// order and are keyed by variant name.
pub fn compose_all(
    base: &SiteConfig,
    variants: &[Variant],
) -> Vec<(String, Result<SiteConfig, ConfigDiagnostics>)> {
    variants
        .par_iter()
        .map(|variant| (variant.name.clone(), compose(base, variant)))
        .collect()
}

/// Compose and fold diagnostics into a [`ConfigError`].
///
/// Convenience for callers that funnel parse and validation failures
/// through one error type.
pub fn compose_or_err(base: &SiteConfig, variant: &Variant) -> Result<SiteConfig, ConfigError> {
    compose(base, variant).map_err(ConfigError::from)
}

/// Replace the target if the override is present.
fn apply_option<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Base order first, then added order, then removals on the whole list.
fn merge_integrations(
    base: &[IntegrationSpec],
    variant: &Variant,
    diag: &mut ConfigDiagnostics,
) -> Vec<IntegrationSpec> {
    let mut merged = base.to_vec();
    merged.extend(variant.add_integrations.iter().cloned());

    // Removing a name that matches nothing is a typo more often than an
    // intent; warn but keep going.
    for (i, name) in variant.remove_integrations.iter().enumerate() {
        if !merged.iter().any(|spec| &spec.name == name) {
            diag.warn(
                FieldPath::root("remove_integrations").index(i),
                format!("integration `{name}` is not in the merged set"),
            );
        }
    }

    let removed: FxHashSet<&str> = variant
        .remove_integrations
        .iter()
        .map(String::as_str)
        .collect();
    merged.retain(|spec| !removed.contains(spec.name.as_str()));
    merged
}

// ============================================================================
// tests
// ============================================================================
