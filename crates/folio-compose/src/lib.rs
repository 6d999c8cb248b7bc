//! Folio Composition
//!
//! Turns a [`LayoutDocument`](folio_layout::LayoutDocument) plus external data
//! into the ordered list of sections to render. The same resolution serves the
//! public page and the editor preview, so the two cannot diverge.
//!
//! # Resolution rules
//!
//! Per entry, in document order:
//! 1. unregistered type: the entry is skipped
//! 2. editable type: props are the entry's own content
//! 3. static type: props come from the [`DataContext`], or are empty
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_compose::{resolve, SiteData};
//!
//! let context = site.data_context();
//! for section in resolve(&registry, &document, &context) {
//!     println!("{}", section.render());
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod context;
mod resolver;
pub mod site;

// Re-exports
pub use context::DataContext;
pub use resolver::{render_page, resolve, CompositionResolver, ResolvedSection};
pub use site::SiteData;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
