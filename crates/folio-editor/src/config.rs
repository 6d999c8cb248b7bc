//! Editor configuration

use serde::{Deserialize, Serialize};

/// Layout editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Refuse inserts once the page holds this many sections
    pub max_entries: Option<usize>,
    /// Log successful saves at info level
    pub log_saves: bool,
}

impl EditorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an entry limit
    #[inline]
    #[must_use]
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// With save logging on or off
    #[inline]
    #[must_use]
    pub fn with_log_saves(mut self, enabled: bool) -> Self {
        self.log_saves = enabled;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_entries: None,
            log_saves: true,
        }
    }
}
