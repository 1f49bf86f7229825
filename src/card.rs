//! Project card: the summary tile shown inside a home page carousel.
//!
//! The whole card is one link to the project's detail page. Layout, top to
//! bottom:
//!
//! ```text
//! ┌─────────────────────────┐
//! │ thumbnail | monogram    │
//! ├─────────────────────────┤
//! │ Title                   │
//! │ Subtitle                │
//! │ Short description       │
//! │ [status] [A] [B] [C] +2 │
//! └─────────────────────────┘
//! ```

use crate::components::{TagSize, TagVariant, tag};
use crate::config::SiteConfig;
use crate::types::{Project, Status, present};
use maud::{Markup, html};

/// Tech tags shown before collapsing the rest into a `+N` tag.
pub const MAX_CARD_TAGS: usize = 3;

/// Tag color for a status badge.
pub fn status_variant(status: Status) -> TagVariant {
    match status {
        Status::Live => TagVariant::Success,
        Status::InDevelopment => TagVariant::Primary,
        Status::Sunset => TagVariant::Warning,
        Status::Archived => TagVariant::Default,
    }
}

/// Placeholder letter for a card without a thumbnail.
pub fn monogram(title: &str) -> String {
    title
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Render the carousel card for `project`.
pub fn render_card(project: &Project, config: &SiteConfig) -> Markup {
    let href = config.href(&format!("{}/", project.key().page_dir()));
    let shown = project.tech_stack.len().min(MAX_CARD_TAGS);
    let hidden = project.tech_stack.len() - shown;

    html! {
        article.project-card {
            a.card-link href=(href) {
                div.card-media {
                    @if let Some(src) = present(&project.thumbnail) {
                        img src=(src) alt=(project.title) loading="lazy";
                    } @else {
                        div.card-placeholder aria-hidden="true" {
                            span { (monogram(&project.title)) }
                        }
                    }
                }
                div.card-body {
                    h3.card-title { (project.title) }
                    @if let Some(subtitle) = present(&project.subtitle) {
                        p.card-subtitle { (subtitle) }
                    }
                    p.card-description { (project.short_description) }
                    @if project.status.is_some() || shown > 0 {
                        div.card-tags {
                            @if let Some(status) = project.status {
                                (tag(status.label(), status_variant(status), TagSize::Sm))
                            }
                            @for t in &project.tech_stack[..shown] {
                                (tag(t, TagVariant::Default, TagSize::Sm))
                            }
                            @if hidden > 0 {
                                (tag(&format!("+{hidden}"), TagVariant::Default, TagSize::Sm))
                            }
                        }
                    }
                }
            }
        }
    }
}
