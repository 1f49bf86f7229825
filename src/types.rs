//! The project record and its supporting value types.
//!
//! A [`Project`] is the only entity in a portfolio. Four fields are required
//! (`slug`, `category`, `title`, `short_description`); everything else is
//! optional and its absence simply hides the matching section on the rendered
//! page. Sequences use `Vec` with `#[serde(default)]`, so "absent" and "empty"
//! are the same value.
//!
//! Blank strings count as absent: `subtitle = ""` behaves like no subtitle.
//! Renderers read optional text through [`present`] rather than the raw
//! `Option<String>` so that rule is applied in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level grouping of projects. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fullstack,
    Apps,
}

impl Category {
    /// Every category, in home page order.
    pub const ALL: [Category; 2] = [Category::Fullstack, Category::Apps];

    /// URL path segment and serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fullstack => "fullstack",
            Category::Apps => "apps",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}' (expected one of: fullstack, apps)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullstack" => Ok(Category::Fullstack),
            "apps" => Ok(Category::Apps),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Live,
    InDevelopment,
    Sunset,
    Archived,
}

impl Status {
    /// Human-readable label with a leading glyph.
    pub fn label(self) -> &'static str {
        match self {
            Status::Live => "🟢 Live in Production",
            Status::InDevelopment => "🔵 In Development",
            Status::Sunset => "🟠 Sunset",
            Status::Archived => "⚪ Archived",
        }
    }
}

/// Display label for an optional status. `None` maps to an empty string.
pub fn status_display(status: Option<Status>) -> &'static str {
    status.map(Status::label).unwrap_or("")
}

/// What an external link points at. Drives the icon and button style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Website,
    Appstore,
    Playstore,
    Demo,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Video {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

/// One entry in the project table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub slug: String,
    pub category: Category,
    pub title: String,
    pub short_description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProjectImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ProjectLink>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
}

impl Project {
    /// A project with only the required fields set.
    pub fn new(
        category: Category,
        slug: impl Into<String>,
        title: impl Into<String>,
        short_description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            category,
            title: title.into(),
            short_description: short_description.into(),
            subtitle: None,
            description: None,
            overview: None,
            problem_statement: None,
            video: None,
            images: Vec::new(),
            thumbnail: None,
            features: Vec::new(),
            architecture: None,
            tech_stack: Vec::new(),
            role: None,
            responsibilities: Vec::new(),
            status: None,
            links: Vec::new(),
            year: None,
            duration: None,
            team_size: None,
        }
    }

    pub fn key(&self) -> ProjectKey<'_> {
        ProjectKey {
            category: self.category,
            slug: &self.slug,
        }
    }

    pub fn has_video(&self) -> bool {
        self.video.as_ref().is_some_and(|v| !v.url.trim().is_empty())
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn has_media(&self) -> bool {
        self.has_video() || self.has_images()
    }
}

/// The `(category, slug)` pair that identifies a project and its detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectKey<'a> {
    pub category: Category,
    pub slug: &'a str,
}

impl ProjectKey<'_> {
    /// Site-relative directory of the detail page, e.g. `fullstack/shop`.
    pub fn page_dir(&self) -> String {
        format!("{}/{}", self.category, self.slug)
    }
}

impl fmt::Display for ProjectKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.slug)
    }
}

/// Optional text with blank values folded into `None`.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_covers_every_status() {
        assert_eq!(status_display(Some(Status::Live)), "🟢 Live in Production");
        assert_eq!(status_display(Some(Status::InDevelopment)), "🔵 In Development");
        assert_eq!(status_display(Some(Status::Sunset)), "🟠 Sunset");
        assert_eq!(status_display(Some(Status::Archived)), "⚪ Archived");
    }

    #[test]
    fn status_display_none_is_empty() {
        assert_eq!(status_display(None), "");
    }

    #[test]
    fn status_parses_kebab_case() {
        #[derive(Deserialize)]
        struct Wrap {
            status: Status,
        }
        let w: Wrap = toml::from_str(r#"status = "in-development""#).unwrap();
        assert_eq!(w.status, Status::InDevelopment);
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_error() {
        let err = "web".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("web".into()));
        assert!(err.to_string().contains("fullstack, apps"));
    }

    #[test]
    fn present_folds_blank_to_none() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("   ".into())), None);
        assert_eq!(present(&Some(" Lead ".into())), Some("Lead"));
    }

    #[test]
    fn media_predicates() {
        let mut p = Project::new(Category::Apps, "a", "A", "short");
        assert!(!p.has_media());

        p.video = Some(Video {
            url: "https://example.com/v.mp4".into(),
            poster: None,
        });
        assert!(p.has_video());
        assert!(!p.has_images());
        assert!(p.has_media());

        p.video = Some(Video {
            url: " ".into(),
            poster: None,
        });
        assert!(!p.has_video());

        p.images.push(ProjectImage {
            src: "a.png".into(),
            alt: "A".into(),
            caption: None,
        });
        assert!(p.has_media());
    }

    #[test]
    fn key_page_dir_joins_category_and_slug() {
        let p = Project::new(Category::Fullstack, "shop", "Shop", "short");
        assert_eq!(p.key().page_dir(), "fullstack/shop");
        assert_eq!(p.key().to_string(), "fullstack/shop");
    }

    #[test]
    fn unknown_project_field_rejected() {
        let toml = r#"
slug = "a"
category = "apps"
title = "A"
short_description = "s"
subtitel = "typo"
"#;
        let result: Result<Project, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
