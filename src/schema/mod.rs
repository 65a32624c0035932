//! Schema model: the resolved site configuration value.
//!
//! # Fields
//!
//! | Field          | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `site_url`     | Absolute URL the site is deployed under        |
//! | `base_path`    | Path prefix; empty string means root-hosted    |
//! | `title`        | Site title                                     |
//! | `logo`         | Asset reference resolved by the generator      |
//! | `social`       | Social links, platform unique                  |
//! | `integrations` | Generator plugins, name unique, order kept     |
//! | `sidebar`      | Navigation tree of sections and pages          |
//!
//! [`SiteConfig::validate`] runs every check in one pass and returns
//! all violations at once, each tagged with its field path.

mod integration;
mod social;

pub use integration::IntegrationSpec;
pub use social::SocialLink;

use crate::sidebar::{self, SidebarNode};
use crate::types::{ConfigDiagnostics, ConfigError, ErrorKind, FieldPath};
use crate::util;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// SiteConfig
// ============================================================================

/// Root configuration value handed to the external site generator.
///
/// Immutable once composed: each deployment variant resolves to one
/// `SiteConfig`, which the caller passes on and discards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute site URL (e.g. "https://example.github.io").
    pub site_url: String,

    /// Path prefix for subpath hosting (e.g. "/docs"); empty string
    /// means root-hosted.
    pub base_path: String,

    /// Site title.
    pub title: String,

    /// Logo asset reference; resolving it is the generator's job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,

    /// Social links, platform unique, order preserved.
    pub social: Vec<SocialLink>,

    /// Integrations, name unique, declaration order preserved.
    pub integrations: Vec<IntegrationSpec>,

    /// Sidebar navigation tree.
    pub sidebar: Vec<SidebarNode>,
}

impl SiteConfig {
    /// Parse a base specification from TOML text.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML text, collecting any unknown field paths.
    ///
    /// Unknown fields are usually typos; surfacing them beats silently
    /// dropping user intent.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate the configuration.
    ///
    /// Collects all violations in one pass and returns them at once;
    /// errors are data, nothing is thrown.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_into(&mut diag);
        diag.print_warnings();
        diag.into_result()
    }

    /// Run every check into an existing diagnostics collection.
    pub(crate) fn validate_into(&self, diag: &mut ConfigDiagnostics) {
        self.validate_site_url(diag);
        self.validate_base_path(diag);
        self.validate_logo(diag);
        social::validate(&self.social, diag);
        integration::validate(&self.integrations, diag);
        sidebar::validate(&self.sidebar, &FieldPath::root("sidebar"), diag);
    }

    /// Check `site_url` parses as an absolute http/https URL with a host.
    fn validate_site_url(&self, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::root("site_url");

        match url::Url::parse(&self.site_url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field.clone(),
                        ErrorKind::MalformedUrl {
                            reason: format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                        },
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field.clone(),
                        ErrorKind::MalformedUrl {
                            reason: "URL must have a valid host".into(),
                        },
                        "use format like https://example.com",
                    );
                }

                // A URL path with an empty base_path usually means the
                // subpath prefix was forgotten. Warn, never infer: the
                // composed value carries exactly what the caller wrote.
                if self.base_path.is_empty()
                    && let Some(prefix) = util::url_base_path(&self.site_url)
                    && !prefix.is_empty()
                {
                    diag.warn(
                        field,
                        format!(
                            "URL carries path component '{prefix}' but base_path is empty; \
                             set base_path = \"{prefix}\" for subpath hosting"
                        ),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    ErrorKind::MalformedUrl {
                        reason: e.to_string(),
                    },
                    "use format like https://example.com",
                );
            }
        }
    }

    /// Check the base-path format invariant.
    fn validate_base_path(&self, diag: &mut ConfigDiagnostics) {
        if !util::is_valid_base_path(&self.base_path) {
            diag.error_with_hint(
                FieldPath::root("base_path"),
                ErrorKind::InvalidBasePath {
                    got: self.base_path.clone(),
                },
                "use \"\" for root hosting or a prefix like \"/docs\"",
            );
        }
    }

    /// Check the logo reference is a non-empty local path.
    fn validate_logo(&self, diag: &mut ConfigDiagnostics) {
        let Some(logo) = &self.logo else { return };
        let field = FieldPath::root("logo");

        if logo.as_os_str().is_empty() {
            diag.error(field, ErrorKind::EmptyField);
        } else if logo.to_str().is_some_and(|s| s.contains("://")) {
            diag.error_with_hint(
                field,
                ErrorKind::MalformedPath {
                    got: logo.display().to_string(),
                },
                "logo must be a local or package-relative path",
            );
        }
    }
}

/// Print a warning listing unknown fields from `parse_with_ignored`.
pub fn warn_unknown_fields(fields: &[String]) {
    if fields.is_empty() {
        return;
    }
    crate::log!("warning"; "unknown fields in spec, ignoring:");
    for field in fields {
        eprintln!("- {field}");
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::schema::test_*`)
// ============================================================================

/// Parse a spec with minimal required fields plus `extra` TOML.
/// Panics on unknown fields (to catch spec typos in tests).
#[cfg(test)]
pub(crate) fn test_parse_config(extra: &str) -> SiteConfig {
    let spec = format!(
        "site_url = \"https://vinsmoke.github.io\"\ntitle = \"RabbitHole\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&spec).unwrap();
    assert!(
        ignored.is_empty(),
        "test spec has unknown fields: {ignored:?}"
    );
    parsed
}

/// A fully-populated valid config mirroring a real docs site.
#[cfg(test)]
pub(crate) fn test_config() -> SiteConfig {
    SiteConfig {
        site_url: "https://vinsmoke.github.io".into(),
        base_path: String::new(),
        title: "RabbitHole".into(),
        logo: Some(PathBuf::from("src/assets/logo.png")),
        social: vec![SocialLink::new(
            "github",
            "GitHub",
            "https://github.com/vinsmoke/rabbithole",
        )],
        integrations: vec![
            IntegrationSpec::bare("starlight"),
            IntegrationSpec::bare("svelte"),
        ],
        sidebar: vec![
            SidebarNode::section(
                "Overview",
                vec![
                    SidebarNode::page("Getting Started", "getting-started"),
                    SidebarNode::page("Core Concepts", "core-concepts"),
                ],
            ),
            SidebarNode::section(
                "Guides",
                vec![SidebarNode::page("How-To Guides", "how-to")],
            ),
            SidebarNode::section(
                "API Reference",
                vec![
                    SidebarNode::page("Data Models", "api/data-models"),
                    SidebarNode::page("JSON-RPC", "api/json-rpc"),
                ],
            ),
        ],
    }
}

// ============================================================================
// tests
// ============================================================================
