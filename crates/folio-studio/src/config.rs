//! Studio configuration
//!
//! Read from a TOML file; every field is optional.
//!
//! ```toml
//! layout_path = "data/layout.json"
//! site_data_path = "data/site.json"
//! log_filter = "folio=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default layout file
pub const DEFAULT_LAYOUT_PATH: &str = "layout.json";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Studio configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// JSON file holding the persisted layout
    pub layout_path: PathBuf,
    /// JSON file with the site data for static sections
    pub site_data_path: Option<PathBuf>,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl StudioConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// With layout file
    #[must_use]
    pub fn with_layout_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.layout_path = path.into();
        self
    }

    /// With site data file
    #[must_use]
    pub fn with_site_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.site_data_path = Some(path.into());
        self
    }

    /// With tracing filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            layout_path: PathBuf::from(DEFAULT_LAYOUT_PATH),
            site_data_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
