//! Composition resolver
//!
//! Pure and synchronous: resolution never mutates the document, the registry
//! or the context, and never fails.

use crate::context::DataContext;
use folio_layout::{EntryId, LayoutDocument};
use folio_section::{Content, RenderedSection, SectionDescriptor, SectionRegistry};
use std::borrow::Cow;
use std::sync::Arc;

/// One renderable section instance
#[derive(Debug, Clone)]
pub struct ResolvedSection<'a> {
    /// Entry the section comes from
    pub entry_id: EntryId,
    /// Section type
    pub type_id: &'a str,
    /// Props handed to the render contract
    pub props: Cow<'a, Content>,
    /// Descriptor the props are rendered through
    pub descriptor: &'a SectionDescriptor,
}

impl ResolvedSection<'_> {
    /// Render through the descriptor's contract
    #[must_use]
    pub fn render(&self) -> RenderedSection {
        self.descriptor.render(&self.props)
    }
}

/// Resolve `document` against `registry` and `context`
///
/// Output order is document order, minus entries whose type is unregistered.
#[must_use]
pub fn resolve<'a>(
    registry: &'a SectionRegistry,
    document: &'a LayoutDocument,
    context: &'a DataContext,
) -> Vec<ResolvedSection<'a>> {
    document
        .iter()
        .filter_map(|entry| {
            let type_id = entry.section_type_id();
            let Some(descriptor) = registry.descriptor_of(type_id) else {
                tracing::trace!(type_id, entry = %entry.id(), "skipping unregistered section type");
                return None;
            };

            let props = if descriptor.is_editable() {
                Cow::Borrowed(entry.content())
            } else {
                context
                    .get(type_id)
                    .map_or_else(|| Cow::Owned(Content::new()), Cow::Borrowed)
            };

            Some(ResolvedSection {
                entry_id: entry.id(),
                type_id,
                props,
                descriptor,
            })
        })
        .collect()
}

/// Resolve and render in one pass
#[must_use]
pub fn render_page(
    registry: &SectionRegistry,
    document: &LayoutDocument,
    context: &DataContext,
) -> Vec<RenderedSection> {
    resolve(registry, document, context)
        .iter()
        .map(ResolvedSection::render)
        .collect()
}

/// Resolver bound to one registry
///
/// Convenience for callers that resolve repeatedly (live preview).
#[derive(Debug, Clone)]
pub struct CompositionResolver {
    registry: Arc<SectionRegistry>,
}

impl CompositionResolver {
    /// Create resolver over `registry`
    #[inline]
    #[must_use]
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        Self { registry }
    }

    /// Registry in use
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// See [`resolve`]
    #[must_use]
    pub fn resolve<'a>(
        &'a self,
        document: &'a LayoutDocument,
        context: &'a DataContext,
    ) -> Vec<ResolvedSection<'a>> {
        resolve(&self.registry, document, context)
    }

    /// See [`render_page`]
    #[must_use]
    pub fn render_page(&self, document: &LayoutDocument, context: &DataContext) -> Vec<RenderedSection> {
        render_page(&self.registry, document, context)
    }
}
