//! Layout entries and their identity

use folio_section::{Content, SectionRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Stable entry identifier (ULID, never reused)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Ulid);

impl EntryId {
    /// Generate new entry ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One placed instance of a section type
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEntry {
    id: EntryId,
    section_type_id: String,
    pub(crate) content: Content,
}

impl LayoutEntry {
    /// Create entry with a fresh id
    #[must_use]
    pub fn new(section_type_id: impl Into<String>, content: Content) -> Self {
        Self {
            id: EntryId::new(),
            section_type_id: section_type_id.into(),
            content,
        }
    }

    /// Stable identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Referenced section type (may dangle)
    #[inline]
    #[must_use]
    pub fn section_type_id(&self) -> &str {
        &self.section_type_id
    }

    /// Operator-supplied content
    #[inline]
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Label for editor lists: display name, or the raw type id when dangling
    #[must_use]
    pub fn label<'a>(&'a self, registry: &'a SectionRegistry) -> &'a str {
        registry
            .descriptor_of(&self.section_type_id)
            .map_or(self.section_type_id.as_str(), |desc| desc.display_name())
    }

    /// Whether the referenced type is registered and editable
    #[must_use]
    pub fn is_editable(&self, registry: &SectionRegistry) -> bool {
        registry
            .descriptor_of(&self.section_type_id)
            .is_some_and(|desc| desc.is_editable())
    }
}

/// Direction of a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Towards the start of the page
    Up,
    /// Towards the end of the page
    Down,
}

/// Unrecognized move direction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move direction: '{0}' (expected 'up' or 'down')")]
pub struct ParseDirectionError(pub String);

impl FromStr for MoveDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}
