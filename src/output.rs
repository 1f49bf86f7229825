//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every project is its semantic identity (positional index and title),
//! with its key and output path shown as secondary context on indented lines.
//! This makes the output read as a portfolio inventory while still letting
//! users trace a line back to a record in `projects.toml`.
//!
//! # Entity Display Contract
//!
//! Every entity follows the same two-level pattern across commands:
//!
//! 1. **Header line**: positional index + title (+ optional count)
//! 2. **Context lines**: indented `Key:`, `Status:`, summary text, etc.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Full-Stack Projects (4 projects)
//!     001 E-Commerce Platform
//!         Key: fullstack/ecommerce-platform
//!         Status: 🟢 Live in Production
//!         A full-featured e-commerce platform supporting multiple...
//!
//! Config
//!     config.toml
//!     projects.toml
//!     assets/
//! ```
//!
//! ## Show
//!
//! ```text
//! FitTrack Pro
//!     Key: apps/fitness-tracker
//!     Page: apps/fitness-tracker/index.html
//! Sections
//!     001 Header
//!     002 Media (1 video, 2 images)
//!     003 Key Features (7 items)
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//!     001 E-Commerce Platform → fullstack/ecommerce-platform/index.html
//!     002 Real-Time Analytics Dashboard → fullstack/analytics-dashboard/index.html (unchanged)
//! Not found → 404.html
//! Asset → images/poster.jpg
//! Generated 8 project pages, 10 pages total, 1 asset
//! Cache: 2 unchanged, 10 written (12 total)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects. Filesystem facts they need are passed in.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::details::{SectionKind, section_kinds};
use crate::generate::{GenerateEvent, GenerateReport, PageKind, WriteStatus, project_page_path};
use crate::pages::category_section;
use crate::types::{Category, Project, status_display};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 project`, `2 projects`.
fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Key Features (7 items)
/// 002 Architecture & System Design
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

// ============================================================================
// check
// ============================================================================

/// Which optional content files were found next to the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceFiles {
    pub config_toml: bool,
    pub projects_toml: bool,
    pub assets_dir: bool,
}

/// Format the inventory shown by `check`.
pub fn format_check_output(
    catalog: &Catalog,
    config: &SiteConfig,
    files: SourceFiles,
) -> Vec<String> {
    let mut lines = Vec::new();

    for category in Category::ALL {
        let projects: Vec<&Project> = catalog.list_by_category(category).collect();
        let heading = category_section(category).title;
        lines.push(format!(
            "{} ({})",
            heading,
            plural(projects.len(), "project")
        ));
        for (i, project) in projects.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), entity_header(i + 1, &project.title, None)));
            lines.push(format!("{}Key: {}", indent(2), project.key()));
            if let Some(status) = project.status {
                lines.push(format!("{}Status: {}", indent(2), status.label()));
            }
            lines.push(format!(
                "{}{}",
                indent(2),
                truncate_desc(project.short_description.trim(), 60)
            ));
        }
        lines.push(String::new());
    }

    lines.push("Config".to_string());
    if files.config_toml {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if files.projects_toml {
        lines.push(format!("{}projects.toml", indent(1)));
    } else {
        lines.push(format!("{}projects.toml (stock)", indent(1)));
    }
    if files.assets_dir {
        lines.push(format!("{}assets/", indent(1)));
    }
    lines.push(format!("{}Base path: {}", indent(1), config.site.base_path));

    lines
}

/// Print `check` output to stdout.
pub fn print_check_output(catalog: &Catalog, config: &SiteConfig, files: SourceFiles) {
    for line in format_check_output(catalog, config, files) {
        println!("{}", line);
    }
}

// ============================================================================
// list
// ============================================================================

/// One `category/slug` line per project, optionally filtered by category.
pub fn format_list(catalog: &Catalog, category: Option<Category>) -> Vec<String> {
    catalog
        .list_all_identifiers()
        .filter(|key| category.is_none_or(|c| key.category == c))
        .map(|key| key.to_string())
        .collect()
}

/// Print `list` output to stdout.
pub fn print_list(catalog: &Catalog, category: Option<Category>) {
    for line in format_list(catalog, category) {
        println!("{}", line);
    }
}

// ============================================================================
// show
// ============================================================================

/// Extra detail shown next to a section in `show` output.
fn section_detail(kind: SectionKind, project: &Project) -> Option<String> {
    match kind {
        SectionKind::Header => {
            let status = status_display(project.status);
            (!status.is_empty()).then(|| status.to_string())
        }
        SectionKind::Media => {
            let mut parts = Vec::new();
            if project.has_video() {
                parts.push("1 video".to_string());
            }
            if project.has_images() {
                parts.push(plural(project.images.len(), "image"));
            }
            Some(parts.join(", "))
        }
        SectionKind::Features => Some(plural(project.features.len(), "item")),
        SectionKind::TechStack => Some(plural(project.tech_stack.len(), "tag")),
        SectionKind::Role => match project.responsibilities.len() {
            0 => None,
            1 => Some("1 responsibility".to_string()),
            n => Some(format!("{n} responsibilities")),
        },
        SectionKind::Links => Some(plural(project.links.len(), "link")),
        _ => None,
    }
}

/// Format the section outline of one project, as rendered on its page.
pub fn format_show(project: &Project) -> Vec<String> {
    let mut lines = vec![
        project.title.clone(),
        format!("{}Key: {}", indent(1), project.key()),
        format!("{}Page: {}", indent(1), project_page_path(project)),
        "Sections".to_string(),
    ];
    for (i, kind) in section_kinds(project).into_iter().enumerate() {
        let detail = section_detail(kind, project);
        lines.push(format!(
            "{}{}",
            indent(1),
            entity_header(i + 1, kind.title(), detail.as_deref())
        ));
    }
    lines
}

/// Print `show` output to stdout.
pub fn print_show(project: &Project) {
    for line in format_show(project) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format a single generate progress event as display lines.
pub fn format_generate_event(event: &GenerateEvent) -> Vec<String> {
    let (label, path, status) = match event {
        GenerateEvent::Page { kind, path, status } => {
            let label = match kind {
                PageKind::Home => "Home".to_string(),
                PageKind::Project { index, title } => {
                    format!("{}{}", indent(1), entity_header(*index, title, None))
                }
                PageKind::NotFound => "Not found".to_string(),
            };
            (label, path, status)
        }
        GenerateEvent::Asset { path, status } => ("Asset".to_string(), path, status),
    };
    let suffix = match status {
        WriteStatus::Written => "",
        WriteStatus::Unchanged => " (unchanged)",
    };
    vec![format!("{} \u{2192} {}{}", label, path, suffix)]
}

/// Format the closing summary of a build.
pub fn format_generate_summary(report: &GenerateReport) -> Vec<String> {
    vec![
        format!(
            "Generated {}, {} total, {}",
            plural(report.projects, "project page"),
            plural(report.pages, "page"),
            plural(report.assets, "asset")
        ),
        format!("Cache: {}", report.cache_stats),
    ]
}

/// Print the build summary to stdout.
pub fn print_generate_summary(report: &GenerateReport) {
    for line in format_generate_summary(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
