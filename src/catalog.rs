//! The project table and its read-only lookups.
//!
//! A [`Catalog`] is loaded once at startup and never mutated. The stock table
//! ships inside the binary (`data/projects.toml`); a site overrides it by
//! placing its own `projects.toml` in the content directory:
//!
//! ```text
//! content/
//! ├── config.toml
//! ├── projects.toml      ← replaces the stock table entirely
//! └── assets/
//! ```
//!
//! ## File Format
//!
//! ```toml
//! [[project]]
//! slug = "ecommerce-platform"
//! category = "fullstack"
//! title = "E-Commerce Platform"
//! short_description = "Multi-vendor marketplace."
//! tech_stack = ["Rust", "PostgreSQL"]
//! status = "live"
//!
//! [project.video]
//! url = "https://example.com/demo.mp4"
//!
//! [[project.links]]
//! label = "GitHub"
//! url = "https://github.com/example/shop"
//! kind = "github"
//! ```
//!
//! Records keep their authoring order everywhere: listings, carousels and
//! generated output.
//!
//! ## Lookups
//!
//! All lookups are linear scans; a portfolio holds tens of records, not
//! thousands. A miss from [`Catalog::find_by_slug`] is `None` so callers decide
//! whether it means a 404.

use crate::types::{Category, Project, ProjectKey};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of a site-supplied project table inside the content directory.
pub const CATALOG_FILENAME: &str = "projects.toml";

const STOCK_PROJECTS: &str = include_str!("../data/projects.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid slug '{slug}' in {category}: use lowercase letters, digits and dashes")]
    InvalidSlug { category: Category, slug: String },
    #[error("Project {key} is missing required field '{field}'")]
    MissingField { key: String, field: &'static str },
    #[error("Duplicate project: {0}")]
    DuplicateProject(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "project")]
    projects: Vec<Project>,
}

/// Immutable, validated, ordered project table.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog from records in authoring order, validating every record
    /// and the uniqueness of `(category, slug)`.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            validate_project(project)?;
            if !seen.insert(project.key()) {
                return Err(CatalogError::DuplicateProject(project.key().to_string()));
            }
        }
        Ok(Self { projects })
    }

    /// Parse a catalog from TOML text.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_projects(file.projects)
    }

    /// The table compiled into the binary.
    pub fn stock() -> Result<Self, CatalogError> {
        Self::parse(STOCK_PROJECTS)
    }

    /// Load `projects.toml` from the content root, falling back to the stock
    /// table when the file does not exist.
    pub fn load(root: &Path) -> Result<Self, CatalogError> {
        let path = root.join(CATALOG_FILENAME);
        if !path.exists() {
            return Self::stock();
        }
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Every project, in authoring order.
    pub fn list_all(&self) -> &[Project] {
        &self.projects
    }

    /// Projects of one category, in authoring order. Empty when none match.
    pub fn list_by_category(&self, category: Category) -> impl Iterator<Item = &Project> + '_ {
        self.projects
            .iter()
            .filter(move |p| p.category == category)
    }

    /// The project at `(category, slug)`, or `None` when no such page exists.
    pub fn find_by_slug(&self, category: Category, slug: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.category == category && p.slug == slug)
    }

    /// Identifiers of every detail page, in authoring order.
    pub fn list_all_identifiers(&self) -> impl Iterator<Item = ProjectKey<'_>> + '_ {
        self.projects.iter().map(Project::key)
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.list_by_category(category).count()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Whether `slug` is safe to use verbatim as a URL path segment.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate_project(project: &Project) -> Result<(), CatalogError> {
    if !is_valid_slug(&project.slug) {
        return Err(CatalogError::InvalidSlug {
            category: project.category,
            slug: project.slug.clone(),
        });
    }
    let required = [
        ("title", &project.title),
        ("short_description", &project.short_description),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CatalogError::MissingField {
                key: project.key().to_string(),
                field,
            });
        }
    }
    Ok(())
}
