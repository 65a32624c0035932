//! Configuration composer for documentation sites.
//!
//! Produces, validates, and merges the configuration value handed to an
//! external static-site generator. The composer never renders pages,
//! touches the filesystem, or invokes the generator itself - it only
//! turns a base specification plus per-variant overrides into one
//! fully-resolved, validated [`SiteConfig`] per deployment variant.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── schema/        # SiteConfig, SocialLink, IntegrationSpec
//! ├── sidebar/       # Navigation tree: SidebarNode, build/validate
//! ├── compose/       # Variant overrides and merge
//! ├── types/         # FieldPath, diagnostics, error taxonomy
//! ├── util.rs        # URL path extraction, base-path checks
//! └── logger.rs      # log! macro (warnings and hints)
//! ```
//!
//! # Data Flow
//!
//! | Stage     | Input                      | Output                        |
//! |-----------|----------------------------|-------------------------------|
//! | parse     | TOML spec text             | `SiteConfig` / `Variant`      |
//! | build     | sidebar node list          | validated node list           |
//! | compose   | base + variant override    | resolved `SiteConfig`         |
//!
//! Validation collects every violation in a single pass into a
//! [`ConfigDiagnostics`]; errors are data, never control flow.

pub mod compose;
pub mod logger;
pub mod schema;
pub mod sidebar;
pub mod types;
mod util;

pub use compose::{Variant, compose, compose_all};
pub use schema::{IntegrationSpec, SiteConfig, SocialLink};
pub use sidebar::SidebarNode;
pub use types::{ConfigDiagnostics, ConfigError, Diagnostic, ErrorKind, FieldPath};
