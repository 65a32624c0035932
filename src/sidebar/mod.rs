//! Sidebar navigation tree: construction and validation.
//!
//! The sidebar is a tree of sections and pages whose declaration order
//! controls rendered navigation order, so [`build`] attaches no derived
//! state and returns the nodes verbatim - order round-trips unchanged.
//!
//! # Checks
//!
//! | Check            | Error                      |
//! |------------------|----------------------------|
//! | slug uniqueness  | `DuplicateSlug` (whole tree, any depth) |
//! | empty section    | `EmptySection`             |
//! | ambiguous label  | `AmbiguousLabel` (section vs page at one level) |
//! | empty label/slug | `EmptyField`               |
//!
//! Ambiguous navigation entries are rejected rather than silently
//! permitted (fail closed).

use crate::types::{ConfigDiagnostics, ErrorKind, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// SidebarNode
// ============================================================================

/// A node in the sidebar navigation tree.
///
/// Serialized untagged so specs mirror the external generator's literal
/// shape: an entry with `items` is a section, an entry with `slug` is a
/// page.
///
/// ```toml
/// [[sidebar]]
/// label = "Overview"
///
/// [[sidebar.items]]
/// label = "Getting Started"
/// slug = "getting-started"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// A grouping entry with nested children.
    Section {
        label: String,
        items: Vec<SidebarNode>,
    },
    /// A leaf entry pointing at a single documentation page.
    Page { label: String, slug: String },
}

impl SidebarNode {
    /// Section with the given children.
    pub fn section(label: impl Into<String>, items: Vec<SidebarNode>) -> Self {
        Self::Section {
            label: label.into(),
            items,
        }
    }

    /// Page pointing at `slug`.
    pub fn page(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::Page {
            label: label.into(),
            slug: slug.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Section { label, .. } | Self::Page { label, .. } => label,
        }
    }
}

// ============================================================================
// build / validate
// ============================================================================

/// Validate a sidebar tree and return it unchanged on success.
///
/// Slugs and labels are taken verbatim from the caller; no IDs or other
/// derived state are assigned. All violations are collected in one pass.
pub fn build(nodes: Vec<SidebarNode>) -> Result<Vec<SidebarNode>, ConfigDiagnostics> {
    let mut diag = ConfigDiagnostics::new();
    validate(&nodes, &FieldPath::root("sidebar"), &mut diag);
    diag.into_result().map(|()| nodes)
}

/// Validate a sidebar tree into an existing diagnostics collection.
///
/// `field` is the path of the node list itself (e.g. `sidebar`), used
/// to tag every violation with its exact location.
pub(crate) fn validate(nodes: &[SidebarNode], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    // Slug -> first location, across the whole tree (any depth)
    let mut seen_slugs: FxHashMap<&str, FieldPath> = FxHashMap::default();
    validate_level(nodes, field, &mut seen_slugs, diag);
}

/// Validate one children list, recursing into sections.
fn validate_level<'a>(
    nodes: &'a [SidebarNode],
    field: &FieldPath,
    seen_slugs: &mut FxHashMap<&'a str, FieldPath>,
    diag: &mut ConfigDiagnostics,
) {
    // Label -> was it a section, for cross-kind ambiguity at this level
    let mut seen_labels: FxHashMap<&str, bool> = FxHashMap::default();

    for (i, node) in nodes.iter().enumerate() {
        let node_field = field.index(i);

        let label = node.label();
        if label.is_empty() {
            diag.error(node_field.child("label"), ErrorKind::EmptyField);
        }

        let is_section = matches!(node, SidebarNode::Section { .. });
        match seen_labels.get(label) {
            // A section and a page may not share a label at one level
            Some(&first_was_section) if first_was_section != is_section && !label.is_empty() => {
                diag.error(
                    node_field.child("label"),
                    ErrorKind::AmbiguousLabel {
                        label: label.to_string(),
                    },
                );
            }
            Some(_) => {}
            None => {
                seen_labels.insert(label, is_section);
            }
        }

        match node {
            SidebarNode::Section { label, items } => {
                if items.is_empty() {
                    diag.error(
                        node_field.child("items"),
                        ErrorKind::EmptySection {
                            label: label.clone(),
                        },
                    );
                } else {
                    validate_level(items, &node_field.child("items"), seen_slugs, diag);
                }
            }
            SidebarNode::Page { slug, .. } => {
                validate_slug(slug, &node_field.child("slug"), seen_slugs, diag);
            }
        }
    }
}

/// Check one page slug: non-empty, relative, unique across the tree.
fn validate_slug<'a>(
    slug: &'a str,
    field: &FieldPath,
    seen_slugs: &mut FxHashMap<&'a str, FieldPath>,
    diag: &mut ConfigDiagnostics,
) {
    if slug.is_empty() {
        diag.error(field.clone(), ErrorKind::EmptyField);
        return;
    }

    if slug.starts_with('/') || slug.ends_with('/') || slug.contains("//") {
        diag.error_with_hint(
            field.clone(),
            ErrorKind::MalformedPath {
                got: slug.to_string(),
            },
            "slugs are relative paths like \"api/data-models\"",
        );
        return;
    }

    match seen_slugs.get(slug) {
        Some(first) => {
            // One error per duplicate pair, naming both locations
            diag.error(
                field.clone(),
                ErrorKind::DuplicateSlug {
                    slug: slug.to_string(),
                    first: first.as_str().to_string(),
                },
            );
        }
        None => {
            seen_slugs.insert(slug, field.clone());
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn guide_tree() -> Vec<SidebarNode> {
        vec![
            SidebarNode::section(
                "Overview",
                vec![
                    SidebarNode::page("Getting Started", "getting-started"),
                    SidebarNode::page("Core Concepts", "core-concepts"),
                ],
            ),
            SidebarNode::section(
                "Reference",
                vec![
                    SidebarNode::page("Architecture", "architecture"),
                    SidebarNode::page("Data Models", "api/data-models"),
                ],
            ),
        ]
    }

    #[test]
    fn test_build_valid_tree_round_trips() {
        let nodes = guide_tree();
        let built = build(nodes.clone()).unwrap();
        // Verbatim pass-through: declaration order and values unchanged
        assert_eq!(built, nodes);
    }

    #[test]
    fn test_duplicate_slug_across_depths_single_error() {
        let nodes = vec![
            SidebarNode::page("Guide", "guide"),
            SidebarNode::section(
                "Nested",
                vec![SidebarNode::section(
                    "Deeper",
                    vec![SidebarNode::page("Guide Again", "guide")],
                )],
            ),
        ];
        let err = build(nodes).unwrap_err();
        assert_eq!(err.len(), 1);

        let diag = &err.errors()[0];
        // The error points at the second occurrence and names the first
        assert_eq!(diag.field.as_str(), "sidebar[1].items[0].items[0].slug");
        match &diag.kind {
            ErrorKind::DuplicateSlug { slug, first } => {
                assert_eq!(slug, "guide");
                assert_eq!(first, "sidebar[0].slug");
            }
            other => panic!("expected DuplicateSlug, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_section_rejected() {
        let nodes = vec![SidebarNode::section("Guides", vec![])];
        let err = build(nodes).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(matches!(
            err.errors()[0].kind,
            ErrorKind::EmptySection { .. }
        ));
    }

    #[test]
    fn test_section_and_page_sharing_label_rejected() {
        let nodes = vec![
            SidebarNode::section("Guides", vec![SidebarNode::page("Intro", "guides/intro")]),
            SidebarNode::page("Guides", "guides"),
        ];
        let err = build(nodes).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(matches!(
            err.errors()[0].kind,
            ErrorKind::AmbiguousLabel { .. }
        ));
    }

    #[test]
    fn test_same_label_at_different_levels_allowed() {
        let nodes = vec![SidebarNode::section(
            "Guides",
            vec![SidebarNode::page("Guides", "guides")],
        )];
        assert!(build(nodes).is_ok());
    }

    #[test]
    fn test_empty_label_and_slug_flagged() {
        let nodes = vec![SidebarNode::page("", "")];
        let err = build(nodes).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.errors()[0].field.as_str(), "sidebar[0].label");
        assert_eq!(err.errors()[1].field.as_str(), "sidebar[0].slug");
    }

    #[test]
    fn test_absolute_slug_rejected() {
        let nodes = vec![SidebarNode::page("Guide", "/guide")];
        let err = build(nodes).unwrap_err();
        assert!(matches!(
            err.errors()[0].kind,
            ErrorKind::MalformedPath { .. }
        ));
    }

    #[test]
    fn test_untagged_toml_shape() {
        #[derive(Debug, serde::Deserialize)]
        struct Wrapper {
            sidebar: Vec<SidebarNode>,
        }

        let parsed: Wrapper = toml::from_str(
            r#"[[sidebar]]
label = "Overview"

[[sidebar.items]]
label = "Getting Started"
slug = "getting-started"

[[sidebar]]
label = "How-To Guides"
slug = "how-to"
"#,
        )
        .unwrap();

        assert_eq!(
            parsed.sidebar,
            vec![
                SidebarNode::section(
                    "Overview",
                    vec![SidebarNode::page("Getting Started", "getting-started")]
                ),
                SidebarNode::page("How-To Guides", "how-to"),
            ]
        );
    }
}
