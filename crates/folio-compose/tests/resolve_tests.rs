use folio_compose::{render_page, resolve, DataContext, SiteData};
use folio_layout::{EntryId, LayoutDocument, LayoutEntry, PersistedSection};
use folio_section::{builtin, Content};
use proptest::prelude::*;

fn type_pool() -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = vec![
        builtin::HEADER,
        builtin::BLOG,
        builtin::HERO_CENTERED,
        builtin::FOOTER_LINKS,
        builtin::PRICING_TIERED,
    ];
    pool.extend(["retired_gallery", "retired_map"]);
    pool
}

proptest! {
    #[test]
    fn prop_resolve_order_is_document_order(picks in prop::collection::vec(0usize..7, 0..30)) {
        let registry = builtin::registry();
        let pool = type_pool();
        let doc = LayoutDocument::from_records(
            picks
                .iter()
                .zip(0u32..)
                .map(|(&i, order)| PersistedSection::new(pool[i], order, Content::new())),
        );
        let context = SiteData::default().data_context();

        let resolved: Vec<EntryId> = resolve(&registry, &doc, &context)
            .iter()
            .map(|s| s.entry_id)
            .collect();
        let expected: Vec<EntryId> = doc
            .iter()
            .filter(|e| registry.contains(e.section_type_id()))
            .map(LayoutEntry::id)
            .collect();

        prop_assert_eq!(resolved, expected);
    }
}

#[test]
fn preview_and_public_page_render_identically() {
    let registry = builtin::registry();
    let mut doc = LayoutDocument::new();
    for type_id in [
        builtin::HEADER,
        builtin::HERO_SPLIT,
        builtin::RECENT_PROJECTS,
        builtin::FOOTER_NEWSLETTER,
    ] {
        let _ = doc.insert_at_end(&registry, type_id);
    }

    let context = SiteData::default().data_context();
    let public = render_page(&registry, &doc, &context);
    let preview = render_page(&registry, &doc.clone(), &context);
    assert_eq!(public, preview);
    assert_eq!(public.len(), 4);
}

#[test]
fn empty_site_data_renders_placeholders() {
    let registry = builtin::registry();
    let mut doc = LayoutDocument::new();
    let _ = doc.insert_at_end(&registry, builtin::BLOG);

    let page = render_page(&registry, &doc, &DataContext::new());
    assert_eq!(page[0].lines, vec!["posts: No blog posts to display yet.".to_string()]);
}
