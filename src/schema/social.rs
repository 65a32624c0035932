//! Social link entries.

use crate::types::{ConfigDiagnostics, ErrorKind, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A social link shown in the generated site header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Platform identifier understood by the generator (e.g. "github").
    pub platform: String,

    /// Accessible label; the generator falls back to the platform name
    /// when empty.
    pub label: String,

    /// Absolute link target.
    pub url: String,
}

impl SocialLink {
    pub fn new(
        platform: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Validate social links: platform unique, platform and url non-empty.
pub(crate) fn validate(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let social = FieldPath::root("social");

    for (i, link) in links.iter().enumerate() {
        let entry = social.index(i);

        if link.platform.is_empty() {
            diag.error(entry.child("platform"), ErrorKind::EmptyField);
        } else if !seen.insert(&link.platform) {
            diag.error(
                entry.child("platform"),
                ErrorKind::DuplicateSocialPlatform {
                    platform: link.platform.clone(),
                },
            );
        }

        if link.url.is_empty() {
            diag.error(entry.child("url"), ErrorKind::EmptyField);
        }
    }
}

// ============================================================================
// tests
// ============================================================================
