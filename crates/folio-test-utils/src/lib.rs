//! Testing utilities for the Folio workspace
//!
//! Shared registries, layouts and site data.

#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use folio_compose::site::{Post, Profile, Project, SocialLink, WorkExperience};
use folio_compose::SiteData;
use folio_layout::{LayoutDocument, PersistedSection};
use folio_section::{Content, OutlineRenderer, RenderContract, SectionDescriptor, SectionRegistry, Slot};
use serde_json::{json, Value};
use std::sync::Arc;

pub const TYPE_A: &str = "A";
pub const TYPE_B: &str = "B";

pub fn outline() -> Arc<dyn RenderContract> {
    Arc::new(OutlineRenderer::new(vec![Slot::Text {
        key: "headline",
        placeholder: "Untitled",
    }]))
}

pub fn descriptor_a() -> SectionDescriptor {
    SectionDescriptor::editable(TYPE_A, "Section A", outline())
        .with_default_content(json!({ "headline": "H" }))
}

pub fn descriptor_b() -> SectionDescriptor {
    SectionDescriptor::fixed(TYPE_B, "Section B", outline()).allow_multiple()
}

/// `A` editable with `{headline: "H"}`, `B` static multi-instance
pub fn ab_registry() -> SectionRegistry {
    SectionRegistry::new()
        .with(descriptor_a())
        .and_then(|r| r.with(descriptor_b()))
        .unwrap()
}

/// Same as [`ab_registry`] with `B` retired
pub fn a_only_registry() -> SectionRegistry {
    SectionRegistry::new().with(descriptor_a()).unwrap()
}

pub fn content(value: Value) -> Content {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture content must be an object, got {other}"),
    }
}

/// Records in the order given, with dense `sort_order`
pub fn records(types: &[&str]) -> Vec<PersistedSection> {
    types
        .iter()
        .zip(0u32..)
        .map(|(type_id, order)| PersistedSection::new(*type_id, order, Content::new()))
        .collect()
}

pub fn type_ids(document: &LayoutDocument) -> Vec<String> {
    document
        .iter()
        .map(|entry| entry.section_type_id().to_string())
        .collect()
}

pub fn sample_site() -> SiteData {
    let day = |d: u32| Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).single();

    SiteData {
        profile: Profile {
            name: "Ada Lovelace".into(),
            role: "Engineer".into(),
            bio: "Writes programs for engines that do not exist yet.".into(),
        },
        contact_email: "ada@example.com".into(),
        projects: vec![
            Project {
                id: "p1".into(),
                created_at: day(1),
                title: "Analytical Notes".into(),
                slug: "analytical-notes".into(),
                is_featured: true,
                content: Some("Notes on the engine.".into()),
                ..Project::default()
            },
            Project {
                id: "p2".into(),
                created_at: day(5),
                title: "Bernoulli Table".into(),
                slug: "bernoulli".into(),
                is_featured: true,
                content: Some("Computing Bernoulli numbers.".into()),
                ..Project::default()
            },
            Project {
                id: "p3".into(),
                created_at: day(9),
                title: "Draft".into(),
                slug: "draft".into(),
                ..Project::default()
            },
        ],
        posts: vec![Post {
            id: "b1".into(),
            created_at: day(2),
            title: "On Engines".into(),
            slug: "on-engines".into(),
            summary: "A short note.".into(),
            is_featured: false,
        }],
        experience: vec![WorkExperience {
            role: "Analyst".into(),
            company: "Babbage & Co".into(),
            period: "1842 - 1843".into(),
        }],
        links: vec![SocialLink {
            name: "GitHub".into(),
            url: "https://github.com/ada".into(),
        }],
    }
}
