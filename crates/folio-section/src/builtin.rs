//! Built-in portfolio catalog
//!
//! Static sections are fed by the site's own data (profile, projects, posts,
//! experience, links). Editable sections ship with starter content; the two
//! footers may appear more than once.

use crate::descriptor::SectionDescriptor;
use crate::error::RegistryError;
use crate::registry::SectionRegistry;
use crate::render::{OutlineRenderer, RenderContract, Slot};
use once_cell::sync::Lazy;
use serde_json::json;
use std::sync::Arc;

/// Profile header (name, role, bio)
pub const HEADER: &str = "header";
/// Featured projects list
pub const RECENT_PROJECTS: &str = "recent_projects";
/// Work history list
pub const WORK_EXPERIENCE: &str = "work_experience";
/// Blog post list
pub const BLOG: &str = "blog";
/// Contact email and social links
pub const CONNECT: &str = "connect";
/// Centered hero
pub const HERO_CENTERED: &str = "hero_centered";
/// Split hero with image
pub const HERO_SPLIT: &str = "hero_split";
/// Three-column feature grid
pub const FEATURES_GRID: &str = "features_grid";
/// About block with image
pub const ABOUT_TEXT_IMAGE: &str = "about_text_image";
/// Testimonial cards
pub const TESTIMONIALS_CARDS: &str = "testimonials_cards";
/// Team member cards
pub const TEAM_CARDS: &str = "team_cards";
/// Tiered pricing table
pub const PRICING_TIERED: &str = "pricing_tiered";
/// Footer with link columns
pub const FOOTER_LINKS: &str = "footer_links";
/// Footer with newsletter signup
pub const FOOTER_NEWSLETTER: &str = "footer_newsletter";

static BUILTIN: Lazy<Arc<SectionRegistry>> = Lazy::new(|| {
    Arc::new(catalog().unwrap_or_else(|e| panic!("built-in section catalog is invalid: {e}")))
});

/// Shared, process-wide built-in registry
#[must_use]
pub fn registry() -> Arc<SectionRegistry> {
    Arc::clone(&BUILTIN)
}

/// Build a fresh copy of the built-in catalog
///
/// Useful as a starting point for custom catalogs.
///
/// # Errors
/// Only if the catalog definitions themselves are inconsistent.
pub fn catalog() -> Result<SectionRegistry, RegistryError> {
    SectionRegistry::new()
        .with(SectionDescriptor::fixed(
            HEADER,
            "Header",
            outline(vec![
                text("name", "Your Name"),
                text("role", "Your Role"),
                text("bio", ""),
            ]),
        ))?
        .with(SectionDescriptor::fixed(
            RECENT_PROJECTS,
            "Recent Projects",
            outline(vec![list(
                "projects",
                &["title", "slug", "summary"],
                "No featured projects to display yet. Star a project in the admin panel to feature it here.",
            )]),
        ))?
        .with(SectionDescriptor::fixed(
            WORK_EXPERIENCE,
            "Work Experience",
            outline(vec![list("experiences", &["role", "company", "period"], "None listed.")]),
        ))?
        .with(SectionDescriptor::fixed(
            BLOG,
            "Blog",
            outline(vec![list("posts", &["title", "slug", "summary"], "No blog posts to display yet.")]),
        ))?
        .with(SectionDescriptor::fixed(
            CONNECT,
            "Connect",
            outline(vec![text("email", ""), list("links", &["name", "url"], "None listed.")]),
        ))?
        .with(
            SectionDescriptor::editable(
                HERO_CENTERED,
                "Hero (Centered)",
                outline(vec![
                    text("headline", "Headline"),
                    text("subtext", "Subtext describing the hero section."),
                    text("cta_text", "Call to Action"),
                    text("cta_link", "#"),
                ]),
            )
            .with_default_content(json!({
                "headline": "Centered Hero Headline",
                "subtext": "A compelling subtext goes here.",
                "cta_text": "Get Started",
                "cta_link": "#"
            })),
        )?
        .with(
            SectionDescriptor::editable(
                HERO_SPLIT,
                "Hero (Split)",
                outline(vec![
                    text("headline", "Headline"),
                    text("subtext", "Subtext for the split hero section."),
                    text("cta_text", "CTA"),
                    text("cta_link", "#"),
                    text("image_url", "https://placehold.co/600x400"),
                ]),
            )
            .with_default_content(json!({
                "headline": "Split Hero Headline",
                "subtext": "A compelling subtext.",
                "cta_text": "Learn More",
                "cta_link": "#",
                "image_url": "https://placehold.co/600x400"
            })),
        )?
        .with(
            SectionDescriptor::editable(
                FEATURES_GRID,
                "Features Grid",
                outline(vec![
                    text("title", "Features"),
                    list("features", &["icon", "name", "description"], "Feature Name"),
                ]),
            )
            .with_default_content(json!({
                "title": "Our Features",
                "features": [
                    { "icon": "✨", "name": "Feature One", "description": "Description one." },
                    { "icon": "🚀", "name": "Feature Two", "description": "Description two." },
                    { "icon": "💡", "name": "Feature Three", "description": "Description three." }
                ]
            })),
        )?
        .with(
            SectionDescriptor::editable(
                ABOUT_TEXT_IMAGE,
                "About (Text & Image)",
                outline(vec![
                    text("title", "About Me"),
                    text("image_url", "https://placehold.co/500x500"),
                    text("paragraph1", "First paragraph of about section."),
                    text("paragraph2", "Second paragraph of about section."),
                ]),
            )
            .with_default_content(json!({
                "title": "About Us",
                "image_url": "https://placehold.co/500x500",
                "paragraph1": "Lorem ipsum dolor sit amet.",
                "paragraph2": "Consectetur adipiscing elit."
            })),
        )?
        .with(
            SectionDescriptor::editable(
                TESTIMONIALS_CARDS,
                "Testimonials",
                outline(vec![
                    text("title", "Testimonials"),
                    list("testimonials", &["quote", "name", "company"], "This is a fantastic testimonial."),
                ]),
            )
            .with_default_content(json!({
                "title": "What Our Clients Say",
                "testimonials": [
                    { "quote": "Amazing work!", "name": "Jane Doe", "company": "Acme Inc." },
                    { "quote": "Highly recommended.", "name": "John Smith", "company": "Beta Corp." }
                ]
            })),
        )?
        .with(
            SectionDescriptor::editable(
                TEAM_CARDS,
                "Team Cards",
                outline(vec![
                    text("title", "Our Team"),
                    list("members", &["name", "role", "image_url"], "Team Member"),
                ]),
            )
            .with_default_content(json!({
                "title": "Our Team",
                "members": [
                    { "name": "Person 1", "role": "CEO", "image_url": "https://placehold.co/200x200" },
                    { "name": "Person 2", "role": "CTO", "image_url": "https://placehold.co/200x200" }
                ]
            })),
        )?
        .with(
            SectionDescriptor::editable(
                PRICING_TIERED,
                "Pricing Table",
                outline(vec![
                    text("title", "Pricing"),
                    list("tiers", &["name", "price", "period", "cta_text", "popular"], "Tier Name"),
                ]),
            )
            .with_default_content(json!({
                "title": "Our Plans",
                "tiers": [
                    {
                        "name": "Basic",
                        "price": 29,
                        "period": "/mo",
                        "features": ["Feature A", "Feature B"],
                        "cta_text": "Choose Plan"
                    },
                    {
                        "name": "Pro",
                        "price": 99,
                        "period": "/mo",
                        "features": ["Feature A", "Feature B", "Feature C"],
                        "cta_text": "Choose Plan",
                        "popular": true
                    }
                ]
            })),
        )?
        .with(
            SectionDescriptor::editable(
                FOOTER_LINKS,
                "Footer (with Links)",
                outline(vec![
                    list("columns", &["title"], "Column"),
                    text("copyright", "Your Company"),
                ]),
            )
            .with_default_content(json!({
                "copyright": "Your Company Name",
                "columns": [
                    {
                        "title": "Product",
                        "links": [
                            { "text": "Pricing", "href": "#" },
                            { "text": "Features", "href": "#" }
                        ]
                    }
                ]
            }))
            .allow_multiple(),
        )?
        .with(
            SectionDescriptor::editable(
                FOOTER_NEWSLETTER,
                "Footer (Newsletter)",
                outline(vec![
                    text("title", "Join our Newsletter"),
                    text("subtitle", "Stay up to date with our latest news."),
                    text("copyright", "Your Company"),
                ]),
            )
            .with_default_content(json!({
                "title": "Join Our Newsletter",
                "subtitle": "Get the latest updates.",
                "copyright": "Your Company Name"
            }))
            .allow_multiple(),
        )
}

fn outline(slots: Vec<Slot>) -> Arc<dyn RenderContract> {
    Arc::new(OutlineRenderer::new(slots))
}

fn text(key: &'static str, placeholder: &'static str) -> Slot {
    Slot::Text { key, placeholder }
}

fn list(key: &'static str, fields: &'static [&'static str], empty: &'static str) -> Slot {
    Slot::List { key, fields, empty }
}
