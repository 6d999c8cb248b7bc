//! Section registry
//!
//! Provides [`SectionRegistry`], the type-id keyed catalog of descriptors.
//! Registration happens once at startup; afterwards the registry is shared
//! read-only (typically behind an `Arc`).

use crate::descriptor::SectionDescriptor;
use crate::error::RegistryError;
use indexmap::IndexMap;
use serde_json::Value;

/// Anything that can report which section types are already placed
///
/// Implemented by the layout document; kept here so the registry stays a leaf.
pub trait PlacedSections {
    /// Whether at least one entry references `type_id`
    fn contains_type(&self, type_id: &str) -> bool;
}

impl PlacedSections for [&str] {
    fn contains_type(&self, type_id: &str) -> bool {
        self.iter().any(|placed| *placed == type_id)
    }
}

/// Catalog of section descriptors, in registration order
#[derive(Debug, Default, Clone)]
pub struct SectionRegistry {
    descriptors: IndexMap<String, SectionDescriptor>,
}

impl SectionRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Register a descriptor
    ///
    /// # Errors
    /// Fails on a duplicate type id, on default content attached to a
    /// non-editable type, or on default content that is not a record.
    pub fn register(&mut self, descriptor: SectionDescriptor) -> Result<(), RegistryError> {
        let type_id = descriptor.type_id();

        if self.descriptors.contains_key(type_id) {
            return Err(RegistryError::DuplicateType(type_id.to_string()));
        }

        match (descriptor.is_editable(), descriptor.default_content()) {
            (false, Value::Null) | (true, Value::Object(_)) => {}
            (false, Value::Object(map)) if map.is_empty() => {}
            (false, _) => return Err(RegistryError::DefaultContentOnStatic(type_id.to_string())),
            (true, other) => return Err(RegistryError::content_not_record(type_id, other)),
        }

        self.descriptors.insert(type_id.to_string(), descriptor);
        Ok(())
    }

    /// Register a descriptor, builder style
    ///
    /// # Errors
    /// Same as [`SectionRegistry::register`].
    pub fn with(mut self, descriptor: SectionDescriptor) -> Result<Self, RegistryError> {
        self.register(descriptor)?;
        Ok(self)
    }

    /// Look up a descriptor; absence is a normal outcome
    #[inline]
    #[must_use]
    pub fn descriptor_of(&self, type_id: &str) -> Option<&SectionDescriptor> {
        self.descriptors.get(type_id)
    }

    /// Check if a type is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, type_id: &str) -> bool {
        self.descriptors.contains_key(type_id)
    }

    /// Remove a descriptor, keeping the order of the rest
    ///
    /// Only meant for catalog assembly before the registry is shared.
    pub fn remove(&mut self, type_id: &str) -> Option<SectionDescriptor> {
        self.descriptors.shift_remove(type_id)
    }

    /// Types that can still be added to `document`
    ///
    /// Every type not yet placed, plus every multi-instance type regardless.
    #[must_use]
    pub fn available_types<D>(&self, document: &D) -> Vec<&str>
    where
        D: PlacedSections + ?Sized,
    {
        self.descriptors
            .values()
            .filter(|desc| desc.multi_instance_allowed() || !document.contains_type(desc.type_id()))
            .map(SectionDescriptor::type_id)
            .collect()
    }

    /// Iterate over descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.descriptors.values()
    }

    /// Registered type ids, in registration order
    #[must_use]
    pub fn type_ids(&self) -> Vec<&str> {
        self.descriptors.keys().map(String::as_str).collect()
    }

    /// Get number of registered types
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{OutlineRenderer, RenderContract};
    use serde_json::json;
    use std::sync::Arc;

    fn renderer() -> Arc<dyn RenderContract> {
        Arc::new(OutlineRenderer::default())
    }

    fn registry() -> SectionRegistry {
        SectionRegistry::new()
            .with(SectionDescriptor::fixed("header", "Header", renderer()))
            .unwrap()
            .with(
                SectionDescriptor::editable("hero", "Hero", renderer())
                    .with_default_content(json!({ "headline": "H" })),
            )
            .unwrap()
            .with(SectionDescriptor::editable("footer", "Footer", renderer()).allow_multiple())
            .unwrap()
    }

    #[test]
    fn registry_new_empty() {
        let registry = SectionRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 3);
        assert!(registry.descriptor_of("hero").is_some());
        assert!(registry.descriptor_of("missing").is_none());
    }

    #[test]
    fn registry_rejects_duplicate() {
        let mut registry = registry();
        let result = registry.register(SectionDescriptor::fixed("header", "Again", renderer()));
        assert_eq!(result, Err(RegistryError::DuplicateType("header".to_string())));
    }

    #[test]
    fn registry_rejects_defaults_on_static() {
        let mut registry = SectionRegistry::new();
        let desc = SectionDescriptor::fixed("blog", "Blog", renderer())
            .with_default_content(json!({ "title": "x" }));
        assert!(matches!(
            registry.register(desc),
            Err(RegistryError::DefaultContentOnStatic(_))
        ));
    }

    #[test]
    fn registry_rejects_non_record_defaults() {
        let mut registry = SectionRegistry::new();
        let desc =
            SectionDescriptor::editable("hero", "Hero", renderer()).with_default_content(json!([1]));
        assert!(matches!(
            registry.register(desc),
            Err(RegistryError::ContentNotRecord { found: "array", .. })
        ));
    }

    #[test]
    fn available_types_hides_placed_single_instance() {
        let registry = registry();
        let placed: &[&str] = &["hero", "footer"];
        assert_eq!(registry.available_types(placed), vec!["header", "footer"]);
    }

    #[test]
    fn available_types_on_empty_document() {
        let registry = registry();
        let placed: &[&str] = &[];
        assert_eq!(registry.available_types(placed), vec!["header", "hero", "footer"]);
    }

    #[test]
    fn registry_remove_keeps_order() {
        let mut registry = registry();
        assert!(registry.remove("hero").is_some());
        assert!(registry.remove("hero").is_none());
        assert_eq!(registry.type_ids(), vec!["header", "footer"]);
    }
}
