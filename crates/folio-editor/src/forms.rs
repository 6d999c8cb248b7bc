//! Content form model
//!
//! Only string fields are form-editable; everything else in a content record
//! passes through untouched.

use folio_section::Content;
use serde::Serialize;

/// Fields longer than this are edited as multi-line text
pub const MULTI_LINE_THRESHOLD: usize = 80;

/// Input kind for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line input
    SingleLine,
    /// Text area
    MultiLine,
}

/// One editable field of a content record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// Content key
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Current value
    pub value: String,
    /// Input kind
    pub kind: FieldKind,
}

/// String fields of `content`, in record order
#[must_use]
pub fn content_fields(content: &Content) -> Vec<FormField> {
    content
        .iter()
        .filter_map(|(key, value)| {
            let value = value.as_str()?;
            Some(FormField {
                key: key.clone(),
                label: field_label(key),
                value: value.to_string(),
                kind: field_kind(key, value),
            })
        })
        .collect()
}

fn field_kind(key: &str, value: &str) -> FieldKind {
    let key = key.to_ascii_lowercase();
    if value.chars().count() > MULTI_LINE_THRESHOLD
        || key.contains("text")
        || key.contains("paragraph")
    {
        FieldKind::MultiLine
    } else {
        FieldKind::SingleLine
    }
}

/// Title-case a content key: `button_text` becomes `Button Text`
#[must_use]
pub fn field_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
