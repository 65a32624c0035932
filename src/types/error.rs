//! Error taxonomy and diagnostics collection.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("spec parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl From<ConfigDiagnostics> for ConfigError {
    fn from(diag: ConfigDiagnostics) -> Self {
        Self::Diagnostics(diag)
    }
}

// ============================================================================
// ErrorKind
// ============================================================================

/// What went wrong, independent of where in the config it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// `site_url` does not parse as an absolute http/https URL.
    #[error("malformed URL: {reason}")]
    MalformedUrl { reason: String },

    /// `base_path` is non-empty but not `/`-prefixed, or has a trailing `/`.
    #[error("invalid base path `{got}`: must start with '/' and have no trailing '/'")]
    InvalidBasePath { got: String },

    /// Two integrations share a name.
    #[error("duplicate integration name `{name}`")]
    DuplicateIntegrationName { name: String },

    /// Two pages anywhere in the sidebar tree share a slug.
    #[error("duplicate slug `{slug}`, first used at `{first}`")]
    DuplicateSlug { slug: String, first: String },

    /// A section with no children.
    #[error("section `{label}` has no children")]
    EmptySection { label: String },

    /// A section and a page share a label at the same tree level.
    #[error("label `{label}` names both a section and a page at the same level")]
    AmbiguousLabel { label: String },

    /// Two social links share a platform.
    #[error("duplicate social platform `{platform}`")]
    DuplicateSocialPlatform { platform: String },

    /// A required string or path is empty.
    #[error("value must not be empty")]
    EmptyField,

    /// A path reference that is syntactically not a local path.
    #[error("malformed path `{got}`")]
    MalformedPath { got: String },
}

// ============================================================================
// Diagnostic
// ============================================================================

/// A single validation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Config field path (e.g. "sidebar[1].items[0].slug").
    pub field: FieldPath,
    /// What went wrong.
    pub kind: ErrorKind,
    /// Fix hint (optional).
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(field: FieldPath, kind: ErrorKind) -> Self {
        Self {
            field,
            kind,
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.kind)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Collection of validation diagnostics for one config value.
///
/// Validators push every violation they find; nothing stops at the first
/// error. Warnings are collected separately and never fail validation.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<Diagnostic>,
    /// Collected warnings (surfaced in batch, never fatal).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, kind: ErrorKind) {
        self.errors.push(Diagnostic::new(field, kind));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(&mut self, field: FieldPath, kind: ErrorKind, hint: impl Into<String>) {
        self.errors.push(Diagnostic::new(field, kind).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    ///
    /// Call this after validation to display all warnings at once.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "configuration warnings:");
        for (field, message) in &self.warnings {
            eprintln!("- [{}] {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            FieldPath::root("site_url"),
            ErrorKind::MalformedUrl {
                reason: "relative URL without a base".into(),
            },
        )
        .with_hint("use format like https://example.com");

        let display = format!("{diag}");
        assert!(display.contains("site_url"));
        assert!(display.contains("malformed URL"));
        assert!(display.contains("https://example.com"));
    }

    #[test]
    fn test_into_result_empty_is_ok() {
        let diag = ConfigDiagnostics::new();
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_into_result_with_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(
            FieldPath::root("integrations").index(1).child("name"),
            ErrorKind::DuplicateIntegrationName {
                name: "svelte".into(),
            },
        );
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(format!("{err}").contains("svelte"));
    }

    #[test]
    fn test_warnings_do_not_fail_validation() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::root("site_url"), "url carries a path component");
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_multiple_errors_counted_in_display() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::root("title"), ErrorKind::EmptyField);
        diag.error(
            FieldPath::root("base_path"),
            ErrorKind::InvalidBasePath { got: "docs/".into() },
        );
        let display = format!("{}", diag.into_result().unwrap_err());
        assert!(display.contains("2"));
        assert!(display.contains("errors"));
    }
}
