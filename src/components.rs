//! Small stateless building blocks shared by every page: tags, buttons,
//! section headings and the inline SVG icon set.
//!
//! Every function returns [`Markup`]; none of them look at a [`Project`]
//! directly. Components that receive an empty input render nothing at all
//! rather than an empty wrapper.
//!
//! [`Project`]: crate::types::Project

use crate::types::LinkKind;
use maud::{Markup, html};

/// Color treatment of a [`tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
}

impl TagVariant {
    fn class(self) -> &'static str {
        match self {
            TagVariant::Default => "tag-default",
            TagVariant::Primary => "tag-primary",
            TagVariant::Success => "tag-success",
            TagVariant::Warning => "tag-warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagSize {
    #[default]
    Sm,
    Md,
}

impl TagSize {
    fn class(self) -> &'static str {
        match self {
            TagSize::Sm => "tag-sm",
            TagSize::Md => "tag-md",
        }
    }
}

/// A single pill-shaped badge.
pub fn tag(label: &str, variant: TagVariant, size: TagSize) -> Markup {
    html! {
        span class={ "tag " (variant.class()) " " (size.class()) } { (label) }
    }
}

/// A wrapping row of tags. Renders nothing for an empty list.
pub fn tag_list<S: AsRef<str>>(tags: &[S], variant: TagVariant, size: TagSize) -> Markup {
    html! {
        @if !tags.is_empty() {
            div.tag-list {
                @for t in tags {
                    (tag(t.as_ref(), variant, size))
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

/// A link styled as a button.
///
/// External buttons open in a new tab without leaking the opener.
pub fn button(
    href: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    external: bool,
    content: Markup,
) -> Markup {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Outline => "btn-outline",
    };
    let size_class = match size {
        ButtonSize::Md => "btn-md",
        ButtonSize::Lg => "btn-lg",
    };
    html! {
        @if external {
            a class={ "btn " (variant_class) " " (size_class) } href=(href) target="_blank" rel="noopener noreferrer" {
                (content)
            }
        } @else {
            a class={ "btn " (variant_class) " " (size_class) } href=(href) {
                (content)
            }
        }
    }
}

/// `<h2>` with a leading accent icon.
pub fn section_title(title: &str, icon: Icon) -> Markup {
    html! {
        h2.section-title {
            span.section-icon { (icon.svg()) }
            (title)
        }
    }
}

/// Titled text block on a raised surface.
pub fn content_block(title: &str, content: &str, icon: Icon) -> Markup {
    html! {
        div.content-block {
            h3 {
                span.section-icon { (icon.svg()) }
                (title)
            }
            p { (content) }
        }
    }
}

// ============================================================================
// Icons
// ============================================================================

/// Inline SVG icons. Stroke icons inherit `currentColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Problem,
    Overview,
    Features,
    Architecture,
    Code,
    Person,
    Link,
    ChevronLeft,
    ChevronRight,
    ChevronDown,
    ArrowLeft,
    Home,
    Github,
    Appstore,
    Playstore,
    External,
}

impl Icon {
    /// Icon for an external link button.
    pub fn for_link(kind: LinkKind) -> Icon {
        match kind {
            LinkKind::Github => Icon::Github,
            LinkKind::Appstore => Icon::Appstore,
            LinkKind::Playstore => Icon::Playstore,
            LinkKind::Website | LinkKind::Demo | LinkKind::Other => Icon::External,
        }
    }

    pub fn svg(self) -> Markup {
        match self {
            Icon::Github => filled(GITHUB_PATH),
            Icon::Appstore => filled(APPSTORE_PATH),
            Icon::Playstore => filled(PLAYSTORE_PATH),
            Icon::Problem => stroked("M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"),
            Icon::Overview => stroked(
                "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            ),
            Icon::Features => stroked(
                "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z",
            ),
            Icon::Architecture => stroked(
                "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10",
            ),
            Icon::Code => stroked("M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4"),
            Icon::Person => stroked("M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"),
            Icon::Link => stroked(
                "M13.828 10.172a4 4 0 00-5.656 0l-4 4a4 4 0 105.656 5.656l1.102-1.101m-.758-4.899a4 4 0 005.656 0l4-4a4 4 0 00-5.656-5.656l-1.1 1.1",
            ),
            Icon::ChevronLeft => stroked("M15 19l-7-7 7-7"),
            Icon::ChevronRight => stroked("M9 5l7 7-7 7"),
            Icon::ChevronDown => stroked("M19 9l-7 7-7-7"),
            Icon::ArrowLeft => stroked("M10 19l-7-7m0 0l7-7m-7 7h18"),
            Icon::Home => stroked(
                "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
            ),
            Icon::External => {
                stroked("M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14")
            }
        }
    }
}

fn stroked(d: &str) -> Markup {
    html! {
        svg.icon fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(d) {}
        }
    }
}

fn filled(d: &str) -> Markup {
    html! {
        svg.icon fill="currentColor" viewBox="0 0 24 24" aria-hidden="true" {
            path d=(d) {}
        }
    }
}

const GITHUB_PATH: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";
const APPSTORE_PATH: &str = "M18.71 19.5c-.83 1.24-1.71 2.45-3.05 2.47-1.34.03-1.77-.79-3.29-.79-1.53 0-2 .77-3.27.82-1.31.05-2.3-1.32-3.14-2.53C4.25 17 2.94 12.45 4.7 9.39c.87-1.52 2.43-2.48 4.12-2.51 1.28-.02 2.5.87 3.29.87.78 0 2.26-1.07 3.81-.91.65.03 2.47.26 3.64 1.98-.09.06-2.17 1.28-2.15 3.81.03 3.02 2.65 4.03 2.68 4.04-.03.07-.42 1.44-1.38 2.83M13 3.5c.73-.83 1.94-1.46 2.94-1.5.13 1.17-.34 2.35-1.04 3.19-.69.85-1.83 1.51-2.95 1.42-.15-1.15.41-2.35 1.05-3.11z";
const PLAYSTORE_PATH: &str = "M3,20.5V3.5C3,2.91 3.34,2.39 3.84,2.15L13.69,12L3.84,21.85C3.34,21.6 3,21.09 3,20.5M16.81,15.12L6.05,21.34L14.54,12.85L16.81,15.12M20.16,10.81C20.5,11.08 20.75,11.5 20.75,12C20.75,12.5 20.53,12.9 20.18,13.18L17.89,14.5L15.39,12L17.89,9.5L20.16,10.81M6.05,2.66L16.81,8.88L14.54,11.15L6.05,2.66Z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_carries_variant_and_size_classes() {
        let html = tag("Rust", TagVariant::Primary, TagSize::Md).into_string();
        assert!(html.contains(r#"class="tag tag-primary tag-md""#));
        assert!(html.contains(">Rust<"));
    }

    #[test]
    fn tag_list_empty_renders_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(
            tag_list(&empty, TagVariant::Default, TagSize::Sm).into_string(),
            ""
        );
    }

    #[test]
    fn tag_list_renders_each_tag_in_order() {
        let html = tag_list(&["A", "B", "C"], TagVariant::Default, TagSize::Sm).into_string();
        assert_eq!(html.matches(r#"class="tag "#).count(), 3);
        let a = html.find(">A<").unwrap();
        let c = html.find(">C<").unwrap();
        assert!(a < c);
    }

    #[test]
    fn tag_escapes_label() {
        let html = tag("<b>", TagVariant::Default, TagSize::Sm).into_string();
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn external_button_opens_new_tab() {
        let html = button(
            "https://example.com",
            ButtonVariant::Outline,
            ButtonSize::Md,
            true,
            html! { "Go" },
        )
        .into_string();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("btn-outline"));
    }

    #[test]
    fn internal_button_stays_in_tab() {
        let html = button("/", ButtonVariant::Primary, ButtonSize::Lg, false, html! { "Home" })
            .into_string();
        assert!(!html.contains("target="));
        assert!(html.contains("btn-primary btn-lg"));
    }

    #[test]
    fn link_icons_by_kind() {
        assert_eq!(Icon::for_link(LinkKind::Github), Icon::Github);
        assert_eq!(Icon::for_link(LinkKind::Appstore), Icon::Appstore);
        assert_eq!(Icon::for_link(LinkKind::Playstore), Icon::Playstore);
        assert_eq!(Icon::for_link(LinkKind::Demo), Icon::External);
        assert_eq!(Icon::for_link(LinkKind::Website), Icon::External);
        assert_eq!(Icon::for_link(LinkKind::Other), Icon::External);
    }

    #[test]
    fn content_block_has_heading_and_text() {
        let html = content_block("Overview", "Body text", Icon::Overview).into_string();
        assert!(html.contains("<h3>"));
        assert!(html.contains("Overview"));
        assert!(html.contains("<p>Body text</p>"));
    }
}
