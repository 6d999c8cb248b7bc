//! Folio Studio
//!
//! Command-line editing and preview of the portfolio layout, backed by a
//! JSON layout file and optional site data for the static sections.
//!
//! ```text
//! folio --layout page.json add hero_centered
//! folio --layout page.json set 0 headline "Hello"
//! folio --layout page.json --site-data site.json render
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Re-exports
pub use cli::{Action, Invocation};
pub use commands::Studio;
pub use config::{ConfigError, StudioConfig};
