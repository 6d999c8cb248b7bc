//! Error types for the layout editor
//!
//! Editing operations never fail (refusals are silent no-ops); only
//! persistence round trips produce errors.

use std::path::PathBuf;

/// Persistence gateway errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Reading the persisted layout failed
    #[error("load failed: {0}")]
    LoadFailed(String),

    /// Storing the new layout failed; the previous layout is still in place
    #[error("replace failed: {0}")]
    ReplaceFailed(String),

    /// IO error on a file-backed store
    #[error("io error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Stored data could not be encoded or decoded
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Store contents violate the gateway's own bookkeeping
    #[error("corrupt store: {0}")]
    Corrupt(String),
}

impl GatewayError {
    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether a manual retry of the same request may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::LoadFailed(_) | Self::ReplaceFailed(_) | Self::Io { .. }
        )
    }
}

/// Main editor error type
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Gateway round trip failed
    #[error("persistence failed: {0}")]
    Persistence(#[from] GatewayError),
}

impl EditorError {
    /// Whether the operator may simply try again
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Persistence(e) => e.is_retryable(),
        }
    }
}
