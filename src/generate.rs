//! HTML site generation.
//!
//! Turns a [`Catalog`] and [`SiteConfig`] into a static site. Rendering is a
//! pure function of those two inputs; this module adds the filesystem side:
//! writing pages, copying assets, and skipping writes the build cache proves
//! unnecessary.
//!
//! ## Generated Pages
//!
//! - **Home page** (`/index.html`): hero and one carousel per category
//! - **Project pages** (`/{category}/{slug}/index.html`): details view
//! - **Not-found page** (`/404.html`): served by most static hosts on a miss
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── .build-cache.json           # Content hashes of the last build
//! ├── fullstack/
//! │   └── ecommerce-platform/
//! │       └── index.html
//! ├── apps/
//! │   └── fitness-tracker/
//! │       └── index.html
//! └── images/                     # Copied verbatim from content/assets/
//!     └── poster.jpg
//! ```
//!
//! ## Parallel Rendering
//!
//! Pages are rendered on the global [rayon](https://docs.rs/rayon) pool, which
//! the CLI sizes from `[processing] max_processes`. Results are collected in
//! catalog order; writes and cache bookkeeping happen on the calling thread.
//!
//! ## Progress Events
//!
//! Pass a [`Sender`] to receive one [`GenerateEvent`] per output file. The
//! sender is dropped when generation returns, which ends a printer loop
//! reading the other side.

use crate::cache::{self, BuildCache, CacheStats};
use crate::catalog::{Catalog, CatalogError};
use crate::config::{self, ConfigError, SiteConfig};
use crate::pages;
use crate::types::Project;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use walkdir::WalkDir;

/// Content subdirectory copied to the output root.
pub const ASSETS_DIR: &str = "assets";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Asset {0} collides with a generated file")]
    AssetCollision(String),
}

/// What a generated file is, for progress output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Project { index: usize, title: String },
    NotFound,
}

/// Whether a file was rewritten or left alone because its content matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    Unchanged,
}

/// Progress events emitted during [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    Page {
        kind: PageKind,
        path: String,
        status: WriteStatus,
    },
    Asset {
        path: String,
        status: WriteStatus,
    },
}

/// A rendered page waiting to be written.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub kind: PageKind,
    /// Site-relative output path with `/` separators.
    pub path: String,
    pub html: String,
}

/// Summary of a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub pages: usize,
    pub projects: usize,
    pub assets: usize,
    pub cache_stats: CacheStats,
}

enum PageJob<'a> {
    Home,
    Project(usize, &'a Project),
    NotFound,
}

/// Load `config.toml` and `projects.toml` from the content directory.
pub fn load_site(source_dir: &Path) -> Result<(SiteConfig, Catalog), GenerateError> {
    let config = config::load_config(source_dir)?;
    let catalog = Catalog::load(source_dir)?;
    Ok((config, catalog))
}

/// Site-relative output path of a project's detail page.
pub fn project_page_path(project: &Project) -> String {
    format!("{}/index.html", project.key().page_dir())
}

/// Render every page of the site in parallel, in output order:
/// home, one page per project in catalog order, then 404.
pub fn render_site(catalog: &Catalog, config: &SiteConfig) -> Vec<RenderedPage> {
    let css = pages::site_css(config);

    let mut jobs = vec![PageJob::Home];
    jobs.extend(
        catalog
            .list_all()
            .iter()
            .enumerate()
            .map(|(i, p)| PageJob::Project(i + 1, p)),
    );
    jobs.push(PageJob::NotFound);

    jobs.par_iter()
        .map(|job| match job {
            PageJob::Home => RenderedPage {
                kind: PageKind::Home,
                path: "index.html".to_string(),
                html: pages::render_home(catalog, config, &css).into_string(),
            },
            PageJob::Project(index, project) => RenderedPage {
                kind: PageKind::Project {
                    index: *index,
                    title: project.title.clone(),
                },
                path: project_page_path(project),
                html: pages::render_project_page(project, config, &css).into_string(),
            },
            PageJob::NotFound => RenderedPage {
                kind: PageKind::NotFound,
                path: "404.html".to_string(),
                html: pages::render_not_found(config, &css).into_string(),
            },
        })
        .collect()
}

/// Generate the site into `output_dir`.
///
/// With `use_cache` off the manifest starts empty and every file is written.
pub fn generate(
    catalog: &Catalog,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
    use_cache: bool,
    events: Option<Sender<GenerateEvent>>,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let mut manifest = if use_cache {
        BuildCache::load(output_dir)
    } else {
        BuildCache::empty()
    };
    let mut report = GenerateReport {
        projects: catalog.len(),
        ..Default::default()
    };
    let pages = render_site(catalog, config);
    let assets = collect_assets(&source_dir.join(ASSETS_DIR))?;
    if let Some((rel, _)) = assets.iter().find(|(rel, _)| {
        rel == cache::MANIFEST_FILENAME || pages.iter().any(|page| page.path == *rel)
    }) {
        return Err(GenerateError::AssetCollision(rel.clone()));
    }

    let mut live_paths = Vec::new();

    for page in pages {
        let status = write_if_changed(
            output_dir,
            &page.path,
            page.html.as_bytes(),
            &mut manifest,
            &mut report.cache_stats,
        )?;
        report.pages += 1;
        if let Some(tx) = &events {
            tx.send(GenerateEvent::Page {
                kind: page.kind,
                path: page.path.clone(),
                status,
            })
            .ok();
        }
        live_paths.push(page.path);
    }

    for (rel, path) in assets {
        let bytes = fs::read(&path)?;
        let status = write_if_changed(
            output_dir,
            &rel,
            &bytes,
            &mut manifest,
            &mut report.cache_stats,
        )?;
        report.assets += 1;
        if let Some(tx) = &events {
            tx.send(GenerateEvent::Asset {
                path: rel.clone(),
                status,
            })
            .ok();
        }
        live_paths.push(rel);
    }

    manifest.retain_paths(live_paths.iter().map(String::as_str));
    manifest.save(output_dir)?;
    Ok(report)
}

/// Every file under `assets_root` as (site-relative path, source path), in name order.
fn collect_assets(assets_root: &Path) -> Result<Vec<(String, PathBuf)>, GenerateError> {
    let mut assets = Vec::new();
    if !assets_root.is_dir() {
        return Ok(assets);
    }
    for entry in WalkDir::new(assets_root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            assets.push((site_relative(entry.path(), assets_root), entry.into_path()));
        }
    }
    Ok(assets)
}

/// Write `bytes` to `output_dir/rel` unless the cache shows identical content
/// is already there.
fn write_if_changed(
    output_dir: &Path,
    rel: &str,
    bytes: &[u8],
    manifest: &mut BuildCache,
    stats: &mut CacheStats,
) -> Result<WriteStatus, GenerateError> {
    let hash = cache::hash_content(bytes);
    if manifest.is_fresh(rel, &hash, output_dir) {
        stats.hit();
        return Ok(WriteStatus::Unchanged);
    }
    let dest = output_dir.join(rel);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, bytes)?;
    manifest.insert(rel.to_string(), hash);
    stats.miss();
    Ok(WriteStatus::Written)
}

/// `path` relative to `root`, joined with `/` regardless of platform.
fn site_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{full_project, minimal_project};
    use crate::types::Category;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn small_catalog() -> Catalog {
        Catalog::from_projects(vec![
            full_project(Category::Fullstack, "shop"),
            minimal_project(Category::Apps, "notes"),
        ])
        .unwrap()
    }

    fn run(catalog: &Catalog, source: &Path, output: &Path, use_cache: bool) -> GenerateReport {
        generate(catalog, &SiteConfig::default(), source, output, use_cache, None).unwrap()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn render_site_orders_home_projects_404() {
        let pages = render_site(&small_catalog(), &SiteConfig::default());
        let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "index.html",
                "fullstack/shop/index.html",
                "apps/notes/index.html",
                "404.html"
            ]
        );
        assert_eq!(
            pages[2].kind,
            PageKind::Project {
                index: 2,
                title: "Project notes".into()
            }
        );
    }

    #[test]
    fn every_identifier_gets_a_page() {
        let catalog = Catalog::stock().unwrap();
        let pages = render_site(&catalog, &SiteConfig::default());
        for key in catalog.list_all_identifiers() {
            let path = format!("{}/index.html", key.page_dir());
            assert!(pages.iter().any(|p| p.path == path), "missing {path}");
        }
        assert_eq!(pages.len(), catalog.len() + 2);
    }

    // =========================================================================
    // Writing
    // =========================================================================

    #[test]
    fn generate_writes_all_pages() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let report = run(&small_catalog(), src.path(), out.path(), true);

        assert_eq!(report.pages, 4);
        assert_eq!(report.projects, 2);
        assert_eq!(report.assets, 0);
        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("404.html").exists());
        assert!(out.path().join("fullstack/shop/index.html").exists());
        let notes = fs::read_to_string(out.path().join("apps/notes/index.html")).unwrap();
        assert!(notes.contains("<h1>Project notes</h1>"));
        assert!(cache::manifest_path(out.path()).exists());
    }

    #[test]
    fn second_build_skips_unchanged_pages() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let catalog = small_catalog();

        let first = run(&catalog, src.path(), out.path(), true);
        assert_eq!(first.cache_stats.written, 4);

        let second = run(&catalog, src.path(), out.path(), true);
        assert_eq!(second.cache_stats.unchanged, 4);
        assert_eq!(second.cache_stats.written, 0);
    }

    #[test]
    fn no_cache_rewrites_everything() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let catalog = small_catalog();

        run(&catalog, src.path(), out.path(), true);
        let again = run(&catalog, src.path(), out.path(), false);
        assert_eq!(again.cache_stats.written, 4);
        assert_eq!(again.cache_stats.unchanged, 0);
    }

    #[test]
    fn deleted_output_is_rewritten() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let catalog = small_catalog();

        run(&catalog, src.path(), out.path(), true);
        fs::remove_file(out.path().join("404.html")).unwrap();
        let again = run(&catalog, src.path(), out.path(), true);
        assert_eq!(again.cache_stats.written, 1);
        assert!(out.path().join("404.html").exists());
    }

    #[test]
    fn removed_project_leaves_cache() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        run(&small_catalog(), src.path(), out.path(), true);
        let smaller =
            Catalog::from_projects(vec![minimal_project(Category::Apps, "notes")]).unwrap();
        run(&smaller, src.path(), out.path(), true);

        let manifest = BuildCache::load(out.path());
        assert!(!manifest.entries.contains_key("fullstack/shop/index.html"));
        assert!(manifest.entries.contains_key("apps/notes/index.html"));
    }

    #[test]
    fn assets_copied_to_output_root() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let images = src.path().join("assets/images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("poster.jpg"), b"jpeg").unwrap();
        fs::write(src.path().join("assets/favicon.ico"), b"ico").unwrap();

        let report = run(&small_catalog(), src.path(), out.path(), true);
        assert_eq!(report.assets, 2);
        assert_eq!(
            fs::read(out.path().join("images/poster.jpg")).unwrap(),
            b"jpeg"
        );
        assert!(out.path().join("favicon.ico").exists());
    }

    #[test]
    fn asset_shadowing_a_page_is_rejected() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("assets")).unwrap();
        fs::write(src.path().join("assets/index.html"), "stale").unwrap();

        let result = generate(
            &small_catalog(),
            &SiteConfig::default(),
            src.path(),
            out.path(),
            true,
            None,
        );
        assert!(matches!(
            result,
            Err(GenerateError::AssetCollision(ref path)) if path == "index.html"
        ));
        assert!(!out.path().join("index.html").exists());
    }

    #[test]
    fn asset_shadowing_a_project_page_or_manifest_is_rejected() {
        for rel in ["apps/notes/index.html", ".build-cache.json"] {
            let src = TempDir::new().unwrap();
            let out = TempDir::new().unwrap();
            let dest = src.path().join("assets").join(rel);
            fs::create_dir_all(dest.parent().unwrap()).unwrap();
            fs::write(&dest, "{}").unwrap();

            let result = generate(
                &small_catalog(),
                &SiteConfig::default(),
                src.path(),
                out.path(),
                true,
                None,
            );
            assert!(
                matches!(result, Err(GenerateError::AssetCollision(ref path)) if path == rel),
                "{rel} was not rejected"
            );
        }
    }

    #[test]
    fn events_report_each_file() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("assets")).unwrap();
        fs::write(src.path().join("assets/robots.txt"), "User-agent: *").unwrap();

        let (tx, rx) = mpsc::channel();
        generate(
            &small_catalog(),
            &SiteConfig::default(),
            src.path(),
            out.path(),
            true,
            Some(tx),
        )
        .unwrap();
        let events: Vec<GenerateEvent> = rx.iter().collect();

        assert_eq!(events.len(), 5);
        assert_eq!(
            events[0],
            GenerateEvent::Page {
                kind: PageKind::Home,
                path: "index.html".into(),
                status: WriteStatus::Written,
            }
        );
        assert_eq!(
            events[4],
            GenerateEvent::Asset {
                path: "robots.txt".into(),
                status: WriteStatus::Written,
            }
        );
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn load_site_defaults_without_files() {
        let src = TempDir::new().unwrap();
        let (config, catalog) = load_site(src.path()).unwrap();
        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(catalog.len(), Catalog::stock().unwrap().len());
    }

    #[test]
    fn load_site_reports_config_errors() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("config.toml"), "[site]\nbase_path = \"nope\"").unwrap();
        assert!(matches!(
            load_site(src.path()),
            Err(GenerateError::Config(_))
        ));
    }

    #[test]
    fn load_site_reports_catalog_errors() {
        let src = TempDir::new().unwrap();
        fs::write(
            src.path().join("projects.toml"),
            r#"
[[project]]
slug = "Bad Slug"
category = "apps"
title = "X"
short_description = "Y"
"#,
        )
        .unwrap();
        assert!(matches!(
            load_site(src.path()),
            Err(GenerateError::Catalog(CatalogError::InvalidSlug { .. }))
        ));
    }

    #[test]
    fn site_relative_uses_forward_slashes() {
        let root = Path::new("/content/assets");
        let path = root.join("images").join("a.png");
        assert_eq!(site_relative(&path, root), "images/a.png");
    }
}
