//! Config field paths.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path into a configuration value.
///
/// Paths are built segment by segment so nested and indexed locations
/// stay consistent across validators, e.g. `sidebar[1].items[0].slug`.
///
/// # Example
///
/// ```
/// use doccompose::FieldPath;
///
/// let path = FieldPath::root("sidebar").index(1).child("items").index(0);
/// assert_eq!(path.as_str(), "sidebar[1].items[0]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// Start a path at a top-level field.
    pub fn root(segment: impl Into<String>) -> Self {
        Self(segment.into())
    }

    /// Append a named child segment (`a` -> `a.b`).
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        if self.0.is_empty() {
            Self(segment.to_string())
        } else {
            Self(format!("{}.{segment}", self.0))
        }
    }

    /// Append an index segment (`a` -> `a[3]`).
    #[must_use]
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_and_index() {
        let path = FieldPath::root("sidebar").index(2).child("items").index(0);
        assert_eq!(path.as_str(), "sidebar[2].items[0]");

        let slug = path.child("slug");
        assert_eq!(slug.as_str(), "sidebar[2].items[0].slug");
        // Parent path is unchanged
        assert_eq!(path.as_str(), "sidebar[2].items[0]");
    }

    #[test]
    fn test_child_on_empty_root() {
        let path = FieldPath::default().child("title");
        assert_eq!(path.as_str(), "title");
    }
}
