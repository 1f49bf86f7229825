//! Full-page templates: home, project detail and not-found.
//!
//! Every page shares [`base_document`] (doctype, meta tags, inline CSS) and
//! [`render_footer`]. CSS is inlined so each generated file stands alone;
//! the scroller script is inlined only into pages that contain a scroller.
//!
//! ## Home page
//!
//! ```text
//! section#about         hero: greeting, name, headline, intro, CTAs
//! div#projects
//!   section#fullstack-projects   carousel of cards (omitted when empty)
//!   section#mobile-projects      carousel of cards (omitted when empty)
//! footer                 brand, quick links, div#contact
//! ```

use crate::card::render_card;
use crate::catalog::Catalog;
use crate::components::{ButtonSize, ButtonVariant, Icon, button};
use crate::config::{self, AuthorConfig, SiteConfig};
use crate::details::render_details;
use crate::scroller::render_scroller;
use crate::types::{Category, Project, present};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const SCROLLER_JS: &str = include_str!("../static/scroller.js");

/// Complete inline stylesheet: color variables from config, then base styles.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Heading copy for one category's carousel on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySection {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub fn category_section(category: Category) -> CategorySection {
    match category {
        Category::Fullstack => CategorySection {
            id: "fullstack-projects",
            title: "Full-Stack Projects",
            subtitle: "End-to-end solutions built with modern technologies",
        },
        Category::Apps => CategorySection {
            id: "mobile-projects",
            title: "Mobile Apps",
            subtitle: "Native and cross-platform mobile applications",
        },
    }
}

// ============================================================================
// Shared chrome
// ============================================================================

/// Renders the base HTML document structure.
pub fn base_document(
    config: &SiteConfig,
    title: &str,
    description: &str,
    css: &str,
    with_script: bool,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                @if with_script {
                    script { (PreEscaped(SCROLLER_JS)) }
                }
            }
        }
    }
}

/// Whether any contact link is configured.
pub fn has_contact(author: &AuthorConfig) -> bool {
    present(&author.email).is_some()
        || present(&author.github).is_some()
        || present(&author.linkedin).is_some()
}

/// Site footer: brand blurb, quick links and, if configured, contact links.
pub fn render_footer(config: &SiteConfig) -> Markup {
    let author = &config.author;
    let home = config.href("");
    html! {
        footer.site-footer {
            div.footer-grid {
                div.footer-brand {
                    h3 { (config.site.title) }
                    p { (author.headline) }
                }
                div.footer-links {
                    h4 { "Quick Links" }
                    ul {
                        li { a href={ (home) "#projects" } { "Projects" } }
                        li { a href={ (home) "#about" } { "About" } }
                        @if has_contact(author) {
                            li { a href={ (home) "#contact" } { "Contact" } }
                        }
                    }
                }
                @if has_contact(author) {
                    div.footer-contact id="contact" {
                        h4 { "Get In Touch" }
                        ul {
                            @if let Some(email) = present(&author.email) {
                                li { a href={ "mailto:" (email) } { (email) } }
                            }
                            @if let Some(github) = present(&author.github) {
                                li { a href=(github) target="_blank" rel="noopener noreferrer" { "GitHub" } }
                            }
                            @if let Some(linkedin) = present(&author.linkedin) {
                                li { a href=(linkedin) target="_blank" rel="noopener noreferrer" { "LinkedIn" } }
                            }
                        }
                    }
                }
            }
            p.copyright { "© " (author.name) ". All rights reserved." }
        }
    }
}

// ============================================================================
// Home page
// ============================================================================

/// Render markdown to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Hero / about section at the top of the home page.
pub fn render_hero(config: &SiteConfig) -> Markup {
    let author = &config.author;
    let home = config.href("");
    html! {
        section.hero id="about" {
            div.hero-inner {
                p.hero-greeting { "Hello, I'm" }
                h1.hero-name { (author.name) }
                h2.hero-headline { (author.headline) }
                @if !author.intro.trim().is_empty() {
                    div.hero-intro { (PreEscaped(render_markdown(&author.intro))) }
                }
                div.hero-actions {
                    (button(&format!("{home}#projects"), ButtonVariant::Primary, ButtonSize::Lg, false, html! {
                        "View My Projects"
                        (Icon::ChevronDown.svg())
                    }))
                    @if has_contact(author) {
                        (button(&format!("{home}#contact"), ButtonVariant::Outline, ButtonSize::Lg, false, html! {
                            "Get In Touch"
                        }))
                    }
                }
            }
        }
    }
}

/// One category's carousel. Renders nothing when `projects` is empty.
pub fn render_projects_section(
    category: Category,
    projects: &[&Project],
    config: &SiteConfig,
) -> Markup {
    let meta = category_section(category);
    html! {
        @if !projects.is_empty() {
            section.projects-section id=(meta.id) {
                div.section-header {
                    h2 { (meta.title) }
                    p { (meta.subtitle) }
                }
                (render_scroller(&format!("{}-scroller", meta.id), meta.title, true, html! {
                    @for project in projects {
                        (render_card(project, config))
                    }
                }))
            }
        }
    }
}

/// Renders the home page: hero plus one carousel per non-empty category.
pub fn render_home(catalog: &Catalog, config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        main {
            (render_hero(config))
            div.projects id="projects" {
                @for category in Category::ALL {
                    @let projects: Vec<&Project> = catalog.list_by_category(category).collect();
                    (render_projects_section(category, &projects, config))
                }
                @if catalog.is_empty() {
                    p.empty-state { "No projects yet." }
                }
            }
        }
        (render_footer(config))
    };

    base_document(
        config,
        &config.site.title,
        &config.site.description,
        css,
        !catalog.is_empty(),
        content,
    )
}

// ============================================================================
// Detail and not-found pages
// ============================================================================

/// Renders the detail page for one project.
pub fn render_project_page(project: &Project, config: &SiteConfig, css: &str) -> Markup {
    let title = format!("{} | {}", project.title, config.site.title);
    let content = html! {
        main.project-page {
            nav.back-nav {
                a.back-link href={ (config.href("")) "#projects" } {
                    (Icon::ArrowLeft.svg())
                    span { "Back to projects" }
                }
            }
            (render_details(project))
        }
        (render_footer(config))
    };

    base_document(
        config,
        &title,
        &project.short_description,
        css,
        project.images.len() > 1,
        content,
    )
}

/// Renders the 404 page.
pub fn render_not_found(config: &SiteConfig, css: &str) -> Markup {
    let home = config.href("");
    let title = format!("Page Not Found | {}", config.site.title);
    let content = html! {
        main.not-found {
            p.not-found-code { "404" }
            h1 { "Page Not Found" }
            p { "The page you're looking for doesn't exist or has been moved." }
            div.not-found-actions {
                (button(&home, ButtonVariant::Primary, ButtonSize::Md, false, html! {
                    (Icon::Home.svg())
                    span { "Go Home" }
                }))
                (button(&format!("{home}#projects"), ButtonVariant::Outline, ButtonSize::Md, false, html! {
                    "View Projects"
                }))
            }
        }
        (render_footer(config))
    };

    base_document(config, &title, &config.site.description, css, false, content)
}
