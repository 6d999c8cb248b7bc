//! Folio Section Registry
//!
//! The static catalog of section types a page can be composed from.
//!
//! # Core Concepts
//!
//! - [`SectionDescriptor`]: one reusable page-block template
//! - [`RenderContract`]: capability turning resolved props into a rendered section
//! - [`SectionRegistry`]: type-id keyed catalog, built once and shared read-only
//! - [`builtin`]: the portfolio's own catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_section::builtin;
//!
//! let registry = builtin::registry();
//! let hero = registry.descriptor_of("hero_centered").unwrap();
//! assert!(hero.is_editable());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod builtin;
mod descriptor;
mod error;
mod registry;
mod render;

// Re-exports
pub use descriptor::SectionDescriptor;
pub use error::RegistryError;
pub use registry::{PlacedSections, SectionRegistry};
pub use render::{OutlineRenderer, RenderContract, RenderedSection, Slot};

/// Structured record carried by sections (string, number and nested-list fields)
pub type Content = serde_json::Map<String, serde_json::Value>;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
