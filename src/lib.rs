//! # Simple Folio
//!
//! A minimal static site generator for a developer portfolio. One table of
//! projects becomes a home page (hero plus one horizontally scrolling
//! carousel per category), one generic detail page per project and a
//! not-found page.
//!
//! # Architecture: Data, Components, Pages
//!
//! ```text
//! 1. Data        projects.toml  →  Catalog          (validated, immutable)
//! 2. Components  &Project       →  Markup           (card, details, scroller)
//! 3. Pages       Catalog+Config →  dist/*.html      (home, detail, 404)
//! ```
//!
//! Each layer only looks down. Components never query the catalog; pages never
//! inspect optional fields themselves. Every renderer is a pure function from
//! data to [`maud::Markup`], so tests assert on HTML strings without touching
//! the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The `Project` record, categories, statuses and link kinds |
//! | [`catalog`] | Loading, validating and looking up the project table |
//! | [`components`] | Tags, buttons, section headings and inline SVG icons |
//! | [`scroller`] | Horizontal scroller markup and its scroll-state rules |
//! | [`card`] | Carousel card for one project |
//! | [`details`] | Ordered, conditional sections of a detail page |
//! | [`pages`] | Document shell, hero, footer, home/detail/404 pages |
//! | [`generate`] | Parallel rendering, cached writes and asset copying |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`cache`] | Content-hash manifest that skips unchanged writes |
//! | [`output`] | CLI output formatting for every command |
//!
//! # Design Decisions
//!
//! ## Absent Means Hidden
//!
//! Only `slug`, `category`, `title` and `short_description` are required. Every
//! other field is optional, and a missing (or blank) value hides the matching
//! section instead of rendering an empty heading. The rules live in one table
//! in [`details`]; `simple-folio show` prints what that table decides for a
//! given project.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error, template variables are Rust
//! expressions, and all interpolation is escaped by default.
//!
//! ## Scroll Logic in Rust, Mirrored in JavaScript
//!
//! The carousel needs a few lines of script in the browser. The rules that
//! script follows (step size, end tolerance, when a control is disabled) are
//! modelled in [`scroller`] and tested there; the constants reach the script
//! through data attributes so the two cannot drift apart.
//!
//! ## Self-Contained Output
//!
//! Every page inlines its CSS and, where needed, its script. The output is a
//! directory of plain HTML files that any static file server can host under
//! any path prefix (`site.base_path`).

pub mod cache;
pub mod card;
pub mod catalog;
pub mod components;
pub mod config;
pub mod details;
pub mod generate;
pub mod output;
pub mod pages;
pub mod scroller;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
