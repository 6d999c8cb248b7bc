//! Persisted layout records
//!
//! The unit exchanged with persistence: `{section_type_id, sort_order, content}`.
//! Older stores name the type column `section_id` and may hold `null` content;
//! both are accepted on read.

use folio_section::Content;
use serde::{Deserialize, Deserializer, Serialize};

/// One persisted layout row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSection {
    /// Referenced section type
    #[serde(alias = "section_id")]
    pub section_type_id: String,
    /// Dense 0-based position
    pub sort_order: u32,
    /// Section content (empty for static sections)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Content,
}

impl PersistedSection {
    /// Create record
    #[inline]
    #[must_use]
    pub fn new(section_type_id: impl Into<String>, sort_order: u32, content: Content) -> Self {
        Self {
            section_type_id: section_type_id.into(),
            sort_order,
            content,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Content, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Content>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_legacy_column_name_and_null_content() {
        let row: PersistedSection = serde_json::from_value(json!({
            "id": 7,
            "section_id": "blog",
            "sort_order": 2,
            "content": null
        }))
        .unwrap();

        assert_eq!(row, PersistedSection::new("blog", 2, Content::new()));
    }

    #[test]
    fn missing_content_defaults_to_empty() {
        let row: PersistedSection = serde_json::from_value(json!({
            "section_type_id": "header",
            "sort_order": 0
        }))
        .unwrap();

        assert!(row.content.is_empty());
    }

    #[test]
    fn writes_canonical_field_names() {
        let row = PersistedSection::new("header", 0, Content::new());
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            json!({ "section_type_id": "header", "sort_order": 0, "content": {} })
        );
    }
}
