//! Error types for registry construction
//!
//! Lookups never fail; only building a catalog can.

/// Errors raised while registering section descriptors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A descriptor with this type id is already registered
    #[error("section type already registered: {0}")]
    DuplicateType(String),

    /// Non-editable sections are fed from external data and carry no defaults
    #[error("default content given for non-editable section type: {0}")]
    DefaultContentOnStatic(String),

    /// Default content must be a record
    #[error("default content of {type_id} must be a record, got {found}")]
    ContentNotRecord {
        /// Offending section type
        type_id: String,
        /// JSON kind that was supplied instead
        found: &'static str,
    },
}

impl RegistryError {
    /// Create a not-a-record error from the offending value
    #[must_use]
    pub fn content_not_record(type_id: impl Into<String>, value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::ContentNotRecord {
            type_id: type_id.into(),
            found,
        }
    }
}
