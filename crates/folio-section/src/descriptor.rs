//! Section descriptors
//!
//! A descriptor is immutable once registered. Instances placed on a page never
//! share its default content: [`SectionDescriptor::instantiate_content`] hands
//! out an owned deep copy every time.

use crate::render::{RenderContract, RenderedSection};
use crate::Content;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A reusable page-block template
#[derive(Clone)]
pub struct SectionDescriptor {
    type_id: String,
    display_name: String,
    editable: bool,
    default_content: Value,
    multi_instance_allowed: bool,
    render_contract: Arc<dyn RenderContract>,
}

impl SectionDescriptor {
    /// Create a non-editable section, populated from external data at resolution time
    #[must_use]
    pub fn fixed(
        type_id: impl Into<String>,
        display_name: impl Into<String>,
        render_contract: Arc<dyn RenderContract>,
    ) -> Self {
        Self {
            type_id: type_id.into(),
            display_name: display_name.into(),
            editable: false,
            default_content: Value::Null,
            multi_instance_allowed: false,
            render_contract,
        }
    }

    /// Create an editable section carrying operator-supplied content
    #[must_use]
    pub fn editable(
        type_id: impl Into<String>,
        display_name: impl Into<String>,
        render_contract: Arc<dyn RenderContract>,
    ) -> Self {
        Self {
            editable: true,
            default_content: Value::Object(Content::new()),
            ..Self::fixed(type_id, display_name, render_contract)
        }
    }

    /// Set the content seeding new instances
    #[inline]
    #[must_use]
    pub fn with_default_content(mut self, content: Value) -> Self {
        self.default_content = content;
        self
    }

    /// Allow several instances of this type on one page
    #[inline]
    #[must_use]
    pub fn allow_multiple(mut self) -> Self {
        self.multi_instance_allowed = true;
        self
    }

    /// Unique type key
    #[inline]
    #[must_use]
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Human label
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether instances carry operator-supplied content
    #[inline]
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Whether more than one instance may coexist in a document
    #[inline]
    #[must_use]
    pub fn multi_instance_allowed(&self) -> bool {
        self.multi_instance_allowed
    }

    /// Raw default content as registered
    #[inline]
    #[must_use]
    pub fn default_content(&self) -> &Value {
        &self.default_content
    }

    /// Fresh deep copy of the default content for a new instance
    ///
    /// Non-editable descriptors yield an empty record.
    #[must_use]
    pub fn instantiate_content(&self) -> Content {
        match (&self.default_content, self.editable) {
            (Value::Object(record), true) => record.clone(),
            _ => Content::new(),
        }
    }

    /// Render capability bound to this type
    #[inline]
    #[must_use]
    pub fn render_contract(&self) -> &Arc<dyn RenderContract> {
        &self.render_contract
    }

    /// Render resolved props through this type's contract
    #[must_use]
    pub fn render(&self, props: &Content) -> RenderedSection {
        self.render_contract.render(&self.type_id, props)
    }
}

impl fmt::Debug for SectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionDescriptor")
            .field("type_id", &self.type_id)
            .field("display_name", &self.display_name)
            .field("editable", &self.editable)
            .field("default_content", &self.default_content)
            .field("multi_instance_allowed", &self.multi_instance_allowed)
            .field("render_contract", &self.render_contract.name())
            .finish()
    }
}
