//! Folio Layout Document
//!
//! The ordered, mutable representation of a page composition.
//!
//! Entries carry a stable [`EntryId`] assigned at creation; their position is
//! never stored, it is simply their place in the sequence. Persisted records
//! ([`PersistedSection`]) carry a dense `sort_order` recomputed on every
//! serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_layout::{LayoutDocument, MoveDirection};
//! use folio_section::builtin;
//!
//! let registry = builtin::registry();
//! let mut doc = LayoutDocument::new();
//! let header = doc.insert_at_end(&registry, "header").entry_id().unwrap();
//! doc.insert_at_end(&registry, "blog");
//! assert!(!doc.move_entry(header, MoveDirection::Up));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod document;
mod entry;
mod record;

// Re-exports
pub use document::{Insertion, LayoutDocument};
pub use entry::{EntryId, LayoutEntry, MoveDirection, ParseDirectionError};
pub use record::PersistedSection;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
