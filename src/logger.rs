//! Logging utilities with colored output.
//!
//! This module provides the `log!` macro for formatted terminal output
//! with colored module prefixes. Only warnings and hints go through
//! here - validation errors are data ([`crate::ConfigDiagnostics`])
//! and are never printed by the library on its own.
//!
//! # Example
//!
//! ```ignore
//! log!("warning"; "ignoring {} unknown fields", count);
//! ```

use owo_colors::OwoColorize;
use std::io::{Write, stderr};

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold().to_string(),
        "hint" => prefix.bright_blue().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_prefix_contains_module() {
        // Colored or not (depends on terminal detection), the module
        // name must survive in the prefix.
        assert!(colorize_prefix("warning").contains("[warning]"));
        assert!(colorize_prefix("ERROR").contains("[ERROR]"));
    }
}
