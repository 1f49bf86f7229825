//! Shared test utilities for the simple-folio test suite.
//!
//! Provides project builders, lookup helpers and bulk extractors that work
//! with catalog data (`Catalog`, `Project`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = Catalog::stock().unwrap();
//! let shop = find_project(&catalog, Category::Fullstack, "ecommerce-platform");
//! assert_eq!(shop.title, "E-Commerce Platform");
//!
//! assert_eq!(slugs(catalog.list_by_category(Category::Apps))[0], "fitness-tracker");
//! ```

use crate::catalog::Catalog;
use crate::types::{
    Category, LinkKind, Project, ProjectImage, ProjectLink, Status, Video,
};

// =========================================================================
// Project builders
// =========================================================================

/// A project with only the required fields, titled after its slug.
pub fn minimal_project(category: Category, slug: &str) -> Project {
    Project::new(
        category,
        slug,
        format!("Project {slug}"),
        format!("Short description of {slug}"),
    )
}

/// A project with every optional field populated.
pub fn full_project(category: Category, slug: &str) -> Project {
    let mut p = minimal_project(category, slug);
    p.subtitle = Some("A subtitle".into());
    p.description = Some("A longer description".into());
    p.overview = Some("The overview".into());
    p.problem_statement = Some("The problem".into());
    p.video = Some(Video {
        url: "https://example.com/demo.mp4".into(),
        poster: Some("/images/poster.jpg".into()),
    });
    p.images = vec![
        ProjectImage {
            src: "/images/one.png".into(),
            alt: "First screen".into(),
            caption: Some("The first screen".into()),
        },
        ProjectImage {
            src: "/images/two.png".into(),
            alt: "Second screen".into(),
            caption: None,
        },
    ];
    p.thumbnail = Some("/images/thumb.png".into());
    p.features = vec!["Offline mode".into(), "Sync".into(), "Sharing".into()];
    p.architecture = Some("A service and a queue".into());
    p.tech_stack = vec![
        "Rust".into(),
        "PostgreSQL".into(),
        "Redis".into(),
        "Docker".into(),
        "AWS".into(),
    ];
    p.role = Some("Lead Developer".into());
    p.responsibilities = vec!["Designed the schema".into(), "Ran the launch".into()];
    p.status = Some(Status::Live);
    p.links = vec![
        ProjectLink {
            label: "Live Demo".into(),
            url: "https://demo.example.com".into(),
            kind: LinkKind::Demo,
        },
        ProjectLink {
            label: "GitHub".into(),
            url: "https://github.com/example/repo".into(),
            kind: LinkKind::Github,
        },
    ];
    p.year = Some(2024);
    p.duration = Some("6 months".into());
    p.team_size = Some("4 developers".into());
    p
}

// =========================================================================
// Catalog lookups: panics with a clear message on miss
// =========================================================================

/// Find a project by category and slug. Panics if not found.
pub fn find_project<'a>(catalog: &'a Catalog, category: Category, slug: &str) -> &'a Project {
    catalog.find_by_slug(category, slug).unwrap_or_else(|| {
        let keys: Vec<String> = catalog
            .list_all_identifiers()
            .map(|k| k.to_string())
            .collect();
        panic!("project '{category}/{slug}' not found. Available: {keys:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Slugs of a sequence of projects, in order.
pub fn slugs<'a>(projects: impl Iterator<Item = &'a Project>) -> Vec<&'a str> {
    projects.map(|p| p.slug.as_str()).collect()
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
