//! Project details view: the body of every detail page.
//!
//! One generic renderer serves every project. The page is a fixed, ordered
//! table of sections; each row pairs a visibility predicate with a renderer:
//!
//! | # | Section | Visible when |
//! |---|---------|--------------|
//! | 1 | Header | always |
//! | 2 | Media | video or at least one image |
//! | 3 | Context | problem statement or overview |
//! | 4 | Key Features | at least one feature |
//! | 5 | Architecture | architecture text |
//! | 6 | Tech Stack | at least one technology |
//! | 7 | Role | role or at least one responsibility |
//! | 8 | Links | at least one link |
//!
//! A section that is not visible emits nothing, not even its heading. Inside
//! a visible section the same rule applies per item: the header's meta bar is
//! dropped entirely when none of its items are set.

use crate::components::{
    ButtonSize, ButtonVariant, Icon, TagSize, TagVariant, button, content_block, section_title,
    tag_list,
};
use crate::scroller::render_scroller;
use crate::types::{LinkKind, Project, present};
use maud::{Markup, html};

/// The sections a details view may contain, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    Media,
    Context,
    Features,
    Architecture,
    TechStack,
    Role,
    Links,
}

impl SectionKind {
    /// Heading shown above the section. The header has none of its own.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Header => "Header",
            SectionKind::Media => "Media",
            SectionKind::Context => "Problem & Overview",
            SectionKind::Features => "Key Features",
            SectionKind::Architecture => "Architecture & System Design",
            SectionKind::TechStack => "Tech Stack",
            SectionKind::Role => "My Role & Responsibilities",
            SectionKind::Links => "Project Links",
        }
    }
}

struct Section {
    kind: SectionKind,
    visible: fn(&Project) -> bool,
    render: fn(&Project) -> Markup,
}

const SECTIONS: [Section; 8] = [
    Section {
        kind: SectionKind::Header,
        visible: always,
        render: render_header,
    },
    Section {
        kind: SectionKind::Media,
        visible: Project::has_media,
        render: render_media,
    },
    Section {
        kind: SectionKind::Context,
        visible: has_context,
        render: render_context,
    },
    Section {
        kind: SectionKind::Features,
        visible: has_features,
        render: render_features,
    },
    Section {
        kind: SectionKind::Architecture,
        visible: has_architecture,
        render: render_architecture,
    },
    Section {
        kind: SectionKind::TechStack,
        visible: has_tech_stack,
        render: render_tech_stack,
    },
    Section {
        kind: SectionKind::Role,
        visible: has_role,
        render: render_role,
    },
    Section {
        kind: SectionKind::Links,
        visible: has_links,
        render: render_links,
    },
];

/// The sections `project` will render, in order.
pub fn section_kinds(project: &Project) -> Vec<SectionKind> {
    SECTIONS
        .iter()
        .filter(|s| (s.visible)(project))
        .map(|s| s.kind)
        .collect()
}

/// Render the full details article for `project`.
pub fn render_details(project: &Project) -> Markup {
    html! {
        article.project-details {
            @for section in SECTIONS.iter().filter(|s| (s.visible)(project)) {
                ((section.render)(project))
            }
        }
    }
}

// ============================================================================
// Predicates
// ============================================================================

fn always(_: &Project) -> bool {
    true
}

fn has_context(p: &Project) -> bool {
    present(&p.problem_statement).is_some() || present(&p.overview).is_some()
}

fn has_features(p: &Project) -> bool {
    !p.features.is_empty()
}

fn has_architecture(p: &Project) -> bool {
    present(&p.architecture).is_some()
}

fn has_tech_stack(p: &Project) -> bool {
    !p.tech_stack.is_empty()
}

fn has_role(p: &Project) -> bool {
    present(&p.role).is_some() || !p.responsibilities.is_empty()
}

fn has_links(p: &Project) -> bool {
    !p.links.is_empty()
}

// ============================================================================
// Renderers
// ============================================================================

/// Label/value pairs for the header's meta bar, in display order.
pub fn meta_items(p: &Project) -> Vec<(&'static str, String)> {
    let mut items = Vec::new();
    if let Some(status) = p.status {
        items.push(("Status", status.label().to_string()));
    }
    if let Some(year) = p.year {
        items.push(("Year", year.to_string()));
    }
    if let Some(duration) = present(&p.duration) {
        items.push(("Duration", duration.to_string()));
    }
    if let Some(team) = present(&p.team_size) {
        items.push(("Team", team.to_string()));
    }
    if let Some(role) = present(&p.role) {
        items.push(("Role", role.to_string()));
    }
    items
}

fn render_header(p: &Project) -> Markup {
    let lead = present(&p.description).unwrap_or(&p.short_description);
    let meta = meta_items(p);
    html! {
        header.details-header {
            h1 { (p.title) }
            @if let Some(subtitle) = present(&p.subtitle) {
                p.details-subtitle { (subtitle) }
            }
            p.details-lead { (lead) }
            @if !meta.is_empty() {
                dl.meta-bar {
                    @for (label, value) in &meta {
                        div.meta-item {
                            dt { (label) ":" }
                            dd { (value) }
                        }
                    }
                }
            }
        }
    }
}

fn render_media(p: &Project) -> Markup {
    let video = p.video.as_ref().filter(|_| p.has_video());
    html! {
        section.details-media {
            @if let Some(video) = video {
                div.video-frame {
                    video controls preload="metadata" poster=[present(&video.poster)] {
                        source src=(video.url);
                        "Your browser does not support the video tag."
                    }
                }
            }
            @if p.has_images() {
                (render_scroller("gallery", "Screenshots", p.images.len() > 1, html! {
                    @for image in &p.images {
                        figure.gallery-item {
                            img src=(image.src) alt=(image.alt) loading="lazy";
                            @if let Some(caption) = present(&image.caption) {
                                figcaption { (caption) }
                            }
                        }
                    }
                }))
            }
        }
    }
}

fn render_context(p: &Project) -> Markup {
    html! {
        section.details-context {
            @if let Some(problem) = present(&p.problem_statement) {
                (content_block("The Problem", problem, Icon::Problem))
            }
            @if let Some(overview) = present(&p.overview) {
                (content_block("Overview", overview, Icon::Overview))
            }
        }
    }
}

fn render_features(p: &Project) -> Markup {
    html! {
        section.details-features {
            (section_title(SectionKind::Features.title(), Icon::Features))
            ul.feature-list {
                @for (index, feature) in p.features.iter().enumerate() {
                    li {
                        span.feature-number aria-hidden="true" { (index + 1) }
                        span { (feature) }
                    }
                }
            }
        }
    }
}

fn render_architecture(p: &Project) -> Markup {
    html! {
        section.details-architecture {
            (section_title(SectionKind::Architecture.title(), Icon::Architecture))
            @if let Some(text) = present(&p.architecture) {
                p.architecture-text { (text) }
            }
        }
    }
}

fn render_tech_stack(p: &Project) -> Markup {
    html! {
        section.details-tech {
            (section_title(SectionKind::TechStack.title(), Icon::Code))
            (tag_list(&p.tech_stack, TagVariant::Primary, TagSize::Md))
        }
    }
}

fn render_role(p: &Project) -> Markup {
    html! {
        section.details-role {
            (section_title(SectionKind::Role.title(), Icon::Person))
            @if let Some(role) = present(&p.role) {
                p.role-title { (role) }
            }
            @if !p.responsibilities.is_empty() {
                ul.responsibility-list {
                    @for item in &p.responsibilities {
                        li { (item) }
                    }
                }
            }
        }
    }
}

/// Repository links read as secondary actions; everything else is primary.
pub fn link_variant(kind: LinkKind) -> ButtonVariant {
    match kind {
        LinkKind::Github => ButtonVariant::Outline,
        _ => ButtonVariant::Primary,
    }
}

fn render_links(p: &Project) -> Markup {
    html! {
        section.details-links {
            (section_title(SectionKind::Links.title(), Icon::Link))
            div.link-row {
                @for link in &p.links {
                    (button(&link.url, link_variant(link.kind), ButtonSize::Md, true, html! {
                        (Icon::for_link(link.kind).svg())
                        span { (link.label) }
                    }))
                }
            }
        }
    }
}
