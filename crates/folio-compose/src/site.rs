//! Site data feeding the static sections
//!
//! Storage of projects and posts lives elsewhere; this module only shapes
//! already-loaded data into a [`DataContext`] for the built-in catalog.

use crate::context::DataContext;
use chrono::{DateTime, Utc};
use folio_section::{builtin, Content};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Characters of project body shown as a card summary
pub const PROJECT_SUMMARY_CHARS: usize = 100;

/// Owner profile shown in the header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Job title
    pub role: String,
    /// Short biography
    pub bio: String,
}

/// Portfolio project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Record id
    pub id: String,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Title
    pub title: String,
    /// URL slug
    pub slug: String,
    /// External link
    pub url: String,
    /// Shown on the home page
    pub is_featured: bool,
    /// Body text
    pub content: Option<String>,
    /// Technologies used
    pub tech_stack: Vec<String>,
}

/// Blog post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Record id
    pub id: String,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Title
    pub title: String,
    /// URL slug
    pub slug: String,
    /// One-line summary
    pub summary: String,
    /// Highlighted in listings
    pub is_featured: bool,
}

/// One job in the work history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    /// Position held
    pub role: String,
    /// Employer
    pub company: String,
    /// Free-form period, e.g. "2022 - 2023"
    pub period: String,
}

/// Social network link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Network name
    pub name: String,
    /// Profile URL
    pub url: String,
}

/// Everything the static sections are populated from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteData {
    /// Header data
    pub profile: Profile,
    /// Contact address for the connect section
    pub contact_email: String,
    /// All projects; only featured ones reach the page
    pub projects: Vec<Project>,
    /// All posts
    pub posts: Vec<Post>,
    /// Work history, in display order
    pub experience: Vec<WorkExperience>,
    /// Social links, in display order
    pub links: Vec<SocialLink>,
}

impl SiteData {
    /// Build the data context for the built-in static sections
    ///
    /// Projects are filtered to featured ones; projects and posts are listed
    /// newest first, undated records last.
    #[must_use]
    pub fn data_context(&self) -> DataContext {
        let mut projects: Vec<&Project> = self.projects.iter().filter(|p| p.is_featured).collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let projects: Vec<Value> = projects
            .into_iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "title": p.title,
                    "slug": p.slug,
                    "url": p.url,
                    "summary": summarize(p.content.as_deref().unwrap_or_default()),
                    "tech_stack": p.tech_stack,
                })
            })
            .collect();

        let posts: Vec<Value> = posts
            .into_iter()
            .map(|p| json!({ "id": p.id, "title": p.title, "slug": p.slug, "summary": p.summary }))
            .collect();

        DataContext::new()
            .with(
                builtin::HEADER,
                record(json!({
                    "name": self.profile.name,
                    "role": self.profile.role,
                    "bio": self.profile.bio,
                })),
            )
            .with(builtin::RECENT_PROJECTS, record(json!({ "projects": projects })))
            .with(builtin::WORK_EXPERIENCE, record(json!({ "experiences": self.experience })))
            .with(builtin::BLOG, record(json!({ "posts": posts })))
            .with(
                builtin::CONNECT,
                record(json!({ "email": self.contact_email, "links": self.links })),
            )
    }
}

fn record(value: Value) -> Content {
    match value {
        Value::Object(map) => map,
        _ => Content::new(),
    }
}

/// First [`PROJECT_SUMMARY_CHARS`] characters, with an ellipsis when cut
fn summarize(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(PROJECT_SUMMARY_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(year: i32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()
    }

    fn site() -> SiteData {
        SiteData {
            profile: Profile {
                name: "Ada".into(),
                role: "Developer".into(),
                bio: "Builds things.".into(),
            },
            contact_email: "ada@example.com".into(),
            projects: vec![
                Project {
                    title: "Old".into(),
                    is_featured: true,
                    created_at: at(2021),
                    ..Project::default()
                },
                Project {
                    title: "Hidden".into(),
                    is_featured: false,
                    created_at: at(2024),
                    ..Project::default()
                },
                Project {
                    title: "New".into(),
                    is_featured: true,
                    created_at: at(2023),
                    content: Some("x".repeat(150)),
                    ..Project::default()
                },
            ],
            posts: vec![
                Post {
                    title: "Undated".into(),
                    ..Post::default()
                },
                Post {
                    title: "Dated".into(),
                    created_at: at(2022),
                    ..Post::default()
                },
            ],
            experience: vec![WorkExperience {
                role: "Founder".into(),
                company: "Acme".into(),
                period: "2023 - Present".into(),
            }],
            links: vec![SocialLink {
                name: "X".into(),
                url: "https://x.com/ada".into(),
            }],
        }
    }

    #[test]
    fn header_gets_profile() {
        let ctx = site().data_context();
        let header = ctx.get(builtin::HEADER).unwrap();
        assert_eq!(header["name"], json!("Ada"));
        assert_eq!(header["role"], json!("Developer"));
    }

    #[test]
    fn recent_projects_are_featured_and_newest_first() {
        let ctx = site().data_context();
        let projects = ctx.get(builtin::RECENT_PROJECTS).unwrap()["projects"]
            .as_array()
            .unwrap()
            .clone();
        let titles: Vec<&str> = projects.iter().filter_map(|p| p["title"].as_str()).collect();
        assert_eq!(titles, vec!["New", "Old"]);

        let summary = projects[0]["summary"].as_str().unwrap();
        assert_eq!(summary.len(), PROJECT_SUMMARY_CHARS + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn posts_put_undated_last() {
        let ctx = site().data_context();
        let posts = &ctx.get(builtin::BLOG).unwrap()["posts"];
        assert_eq!(posts[0]["title"], json!("Dated"));
        assert_eq!(posts[1]["title"], json!("Undated"));
    }

    #[test]
    fn connect_and_experience_are_passed_through() {
        let ctx = site().data_context();
        assert_eq!(ctx.get(builtin::CONNECT).unwrap()["links"][0]["name"], json!("X"));
        assert_eq!(
            ctx.get(builtin::WORK_EXPERIENCE).unwrap()["experiences"][0]["company"],
            json!("Acme")
        );
        assert_eq!(ctx.len(), 5);
    }

    #[test]
    fn summarize_respects_char_boundaries() {
        let text = "é".repeat(120);
        let summary = summarize(&text);
        assert_eq!(summary.chars().count(), PROJECT_SUMMARY_CHARS + 3);
        assert_eq!(summarize("short"), "short");
    }
}
