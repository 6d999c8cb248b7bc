//! Folio Layout Editor
//!
//! Editing session over one page layout plus the persistence side: status
//! machine, save orchestration and the gateways that store the layout.
//!
//! # Save flow
//!
//! ```text
//! begin_save   snapshot records, status -> Saving       (sync)
//! submit       one gateway replace, never retried       (async)
//! finish_save  status -> Saved | Modified | Failed      (sync)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_editor::{EditorConfig, JsonFileGateway, LayoutEditor};
//! use folio_section::builtin;
//! use std::sync::Arc;
//!
//! let gateway = Arc::new(JsonFileGateway::new("layout.json"));
//! let mut editor = LayoutEditor::open(builtin::registry(), gateway, EditorConfig::default()).await?;
//! editor.insert_at_end("hero_centered");
//! editor.save().await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod editor;
mod error;
pub mod forms;
pub mod gateway;
mod status;

// Re-exports
pub use config::EditorConfig;
pub use editor::{LayoutEditor, PendingSave, SaveOutcome, SaveReport};
pub use error::{EditorError, GatewayError};
pub use forms::{FieldKind, FormField};
pub use gateway::{JsonFileGateway, MemoryGateway, PersistenceGateway, VersionedGateway};
pub use status::EditorStatus;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
