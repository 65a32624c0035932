//! Shared utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Error taxonomy and diagnostics collection    |
//! | `field`  | Dotted config field paths                    |

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError, Diagnostic, ErrorKind};
pub use field::FieldPath;
