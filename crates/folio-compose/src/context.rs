//! Data context for static sections

use folio_section::Content;
use std::collections::HashMap;

/// Lookup from section type id to the props of static sections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataContext {
    payloads: HashMap<String, Content>,
}

impl DataContext {
    /// Create empty context
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register props for a type, replacing any previous payload
    pub fn insert(&mut self, type_id: impl Into<String>, props: Content) -> Option<Content> {
        self.payloads.insert(type_id.into(), props)
    }

    /// Register props, builder style
    #[inline]
    #[must_use]
    pub fn with(mut self, type_id: impl Into<String>, props: Content) -> Self {
        self.insert(type_id, props);
        self
    }

    /// Props registered for a type; a missing key is a normal outcome
    #[inline]
    #[must_use]
    pub fn get(&self, type_id: &str) -> Option<&Content> {
        self.payloads.get(type_id)
    }

    /// Number of registered payloads
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Check if context is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}
