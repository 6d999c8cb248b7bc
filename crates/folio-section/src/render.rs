//! Render contracts
//!
//! The composition core only needs a contract to exist and to be identifiable;
//! what it produces is up to the contract. [`OutlineRenderer`] is the plain-text
//! contract used by the built-in catalog and the studio CLI.

use crate::Content;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Capability turning resolved props into a visual section
pub trait RenderContract: Send + Sync {
    /// Identifying name of the contract
    fn name(&self) -> &str;

    /// Render `props` for a section of type `type_id`
    ///
    /// Missing props must degrade to placeholders, never fail.
    fn render(&self, type_id: &str, props: &Content) -> RenderedSection;
}

/// Output of a render contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSection {
    /// Section type that produced the output
    pub type_id: String,
    /// Rendered lines, top to bottom
    pub lines: Vec<String>,
}

impl fmt::Display for RenderedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.type_id)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// One rendered field of an outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Scalar field, replaced by `placeholder` when absent
    Text {
        /// Prop key
        key: &'static str,
        /// Fallback text
        placeholder: &'static str,
    },
    /// List of records, each rendered through `fields`
    List {
        /// Prop key
        key: &'static str,
        /// Item fields to show, in order
        fields: &'static [&'static str],
        /// Line shown when the list is absent or empty
        empty: &'static str,
    },
}

/// Plain-text outline renderer
#[derive(Debug, Clone, Default)]
pub struct OutlineRenderer {
    slots: Vec<Slot>,
}

impl OutlineRenderer {
    /// Create renderer from its slots
    #[inline]
    #[must_use]
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Configured slots
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

impl RenderContract for OutlineRenderer {
    fn name(&self) -> &str {
        "outline"
    }

    fn render(&self, type_id: &str, props: &Content) -> RenderedSection {
        let mut lines = Vec::with_capacity(self.slots.len());

        for slot in &self.slots {
            match *slot {
                Slot::Text { key, placeholder } => {
                    let text = props.get(key).and_then(scalar_text);
                    lines.push(format!("{key}: {}", text.as_deref().unwrap_or(placeholder)));
                }
                Slot::List { key, fields, empty } => match props.get(key) {
                    Some(Value::Array(items)) if !items.is_empty() => {
                        lines.push(format!("{key}:"));
                        lines.extend(items.iter().map(|item| format!("  - {}", list_item(item, fields))));
                    }
                    _ => lines.push(format!("{key}: {empty}")),
                },
            }
        }

        RenderedSection {
            type_id: type_id.to_string(),
            lines,
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn list_item(item: &Value, fields: &[&str]) -> String {
    if let Some(text) = scalar_text(item) {
        return text;
    }

    let parts: Vec<String> = fields
        .iter()
        .filter_map(|field| {
            item.get(*field)
                .and_then(scalar_text)
                .map(|text| format!("{field}={text}"))
        })
        .collect();

    if parts.is_empty() {
        "(empty)".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> Content {
        match value {
            Value::Object(map) => map,
            _ => Content::new(),
        }
    }

    #[test]
    fn text_slot_uses_placeholder_when_missing() {
        let renderer = OutlineRenderer::new(vec![Slot::Text {
            key: "headline",
            placeholder: "Headline",
        }]);

        let out = renderer.render("hero", &Content::new());
        assert_eq!(out.lines, vec!["headline: Headline".to_string()]);
    }

    #[test]
    fn text_slot_renders_numbers() {
        let renderer = OutlineRenderer::new(vec![Slot::Text {
            key: "price",
            placeholder: "0",
        }]);

        let out = renderer.render("pricing", &record(json!({ "price": 29 })));
        assert_eq!(out.lines, vec!["price: 29".to_string()]);
    }

    #[test]
    fn list_slot_renders_items() {
        let renderer = OutlineRenderer::new(vec![Slot::List {
            key: "features",
            fields: &["name", "description"],
            empty: "none",
        }]);

        let props = record(json!({
            "features": [
                { "name": "One", "description": "First" },
                { "name": "Two" },
                {}
            ]
        }));

        let out = renderer.render("features_grid", &props);
        assert_eq!(
            out.lines,
            vec![
                "features:".to_string(),
                "  - name=One, description=First".to_string(),
                "  - name=Two".to_string(),
                "  - (empty)".to_string(),
            ]
        );
    }

    #[test]
    fn list_slot_empty_fallback() {
        let renderer = OutlineRenderer::new(vec![Slot::List {
            key: "posts",
            fields: &["title"],
            empty: "No blog posts to display yet.",
        }]);

        let out = renderer.render("blog", &record(json!({ "posts": [] })));
        assert_eq!(out.lines, vec!["posts: No blog posts to display yet.".to_string()]);
    }

    #[test]
    fn display_prefixes_type() {
        let section = RenderedSection {
            type_id: "blog".to_string(),
            lines: vec!["a".to_string()],
        };
        assert_eq!(section.to_string(), "[blog]\na\n");
    }
}
