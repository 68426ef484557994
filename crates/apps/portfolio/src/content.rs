//! Bundled portfolio content document.
//!
//! The document ships inside the binary and is parsed once per session. A malformed document
//! never blanks the desktop: parsing errors are logged and replaced with [`PortfolioContent::fallback`].

use std::sync::OnceLock;

use leptos::logging;
use serde::Deserialize;

const BUNDLED_CONTENT: &str = include_str!("content.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub location: String,
    pub initials: String,
    pub bio: String,
    #[serde(default)]
    pub goals: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub years: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub source_url: Option<String>,
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLinks {
    pub email: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    /// ISO `YYYY-MM-DD`; lexical order is chronological order.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub social: SocialLinks,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

impl PortfolioContent {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Minimal built-in content used when the bundled document cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            profile: Profile {
                name: "Portfolio".to_string(),
                headline: "Developer".to_string(),
                location: String::new(),
                initials: "P".to_string(),
                bio: "Content is temporarily unavailable.".to_string(),
                goals: String::new(),
            },
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            social: SocialLinks {
                email: "hello@example.com".to_string(),
                github: None,
                linkedin: None,
                resume_url: None,
            },
            posts: Vec::new(),
        }
    }

    /// Posts newest first.
    pub fn posts_newest_first(&self) -> Vec<BlogPost> {
        let mut posts = self.posts.clone();
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        posts
    }

    /// Distinct post tags in first-seen order over the newest-first listing.
    pub fn post_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for post in self.posts_newest_first() {
            for tag in post.tags {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        tags
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }
}

fn load_or_fallback(raw: &str) -> PortfolioContent {
    match PortfolioContent::parse(raw) {
        Ok(content) => content,
        Err(err) => {
            logging::warn!("portfolio content is malformed, using built-in defaults: {err}");
            PortfolioContent::fallback()
        }
    }
}

/// Session-wide portfolio content.
pub fn portfolio_content() -> &'static PortfolioContent {
    static CONTENT: OnceLock<PortfolioContent> = OnceLock::new();
    CONTENT.get_or_init(|| load_or_fallback(BUNDLED_CONTENT))
}
