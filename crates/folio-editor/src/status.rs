//! Editor status machine
//!
//! `Loaded -> Modified -> Saving -> {Saved, Failed}`; any edit after
//! `Saved`/`Failed` goes back to `Modified`. `Saving` is never stored: it is
//! shown on top of the settled status for as long as a save is in flight, so
//! edits made meanwhile keep showing `Saving` and an abandoned save falls
//! back to whatever was settled.

use serde::{Deserialize, Serialize};
use std::fmt;

static SAVING: EditorStatus = EditorStatus::Saving;

/// Where the editing session stands relative to persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorStatus {
    /// Freshly loaded, no edits
    Loaded,
    /// Edited since the last load or save
    Modified,
    /// A save is in flight
    Saving,
    /// Last save succeeded
    Saved,
    /// Last save failed with this message
    Failed(String),
}

impl EditorStatus {
    /// Status to show over this settled one
    #[must_use]
    pub fn or_saving(&self, save_in_flight: bool) -> &Self {
        if save_in_flight {
            &SAVING
        } else {
            self
        }
    }

    /// Check if a save is in flight
    #[inline]
    #[must_use]
    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Saving)
    }

    /// Check if the last save failed
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for EditorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded => f.write_str("loaded"),
            Self::Modified => f.write_str("modified"),
            Self::Saving => f.write_str("saving"),
            Self::Saved => f.write_str("saved"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
