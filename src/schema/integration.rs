//! Integration entries passed through to the external generator.

use crate::types::{ConfigDiagnostics, ErrorKind, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaquely-configured plugin consumed by the external site
/// generator.
///
/// The composer never interprets `options`; they are pass-through data
/// whose insertion order is preserved end to end. Integration order
/// itself is semantically meaningful: some integrations are
/// order-sensitive (a styling plugin must apply before a UI-framework
/// integration that consumes its generated classes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationSpec {
    /// Integration name, unique within a site configuration.
    pub name: String,

    /// Opaque key-value options forwarded verbatim.
    pub options: Map<String, Value>,
}

impl IntegrationSpec {
    /// Integration with no options.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Map::new(),
        }
    }

    /// Integration with the given options.
    pub fn with_options(name: impl Into<String>, options: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Validate integrations: name unique and non-empty, order untouched.
pub(crate) fn validate(integrations: &[IntegrationSpec], diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let field = FieldPath::root("integrations");

    for (i, integration) in integrations.iter().enumerate() {
        let name_field = field.index(i).child("name");

        if integration.name.is_empty() {
            diag.error(name_field, ErrorKind::EmptyField);
        } else if !seen.insert(&integration.name) {
            diag.error(
                name_field,
                ErrorKind::DuplicateIntegrationName {
                    name: integration.name.clone(),
                },
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_duplicate_name_flagged() {
        let integrations = vec![
            IntegrationSpec::bare("starlight"),
            IntegrationSpec::bare("svelte"),
            IntegrationSpec::bare("starlight"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate(&integrations, &mut diag);

        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "integrations[2].name");
    }

    #[test]
    fn test_options_preserve_insertion_order() {
        let toml_spec = r##"name = "starlight"

[options]
title = "RabbitHole"
logo = "src/assets/logo.png"
accent = "#8839ef"
"##;
        let parsed: IntegrationSpec = toml::from_str(toml_spec).unwrap();
        let keys: Vec<&str> = parsed.options.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "logo", "accent"]);
        assert_eq!(parsed.options["title"], json!("RabbitHole"));
    }

    #[test]
    fn test_empty_name_flagged() {
        let integrations = vec![IntegrationSpec::bare("")];
        let mut diag = ConfigDiagnostics::new();
        validate(&integrations, &mut diag);
        assert!(matches!(diag.errors()[0].kind, ErrorKind::EmptyField));
    }
}
