//! Horizontal scroller: a single scrollable row with previous/next controls.
//!
//! The generated page does the scrolling in the browser (`static/scroller.js`),
//! but the rules it follows live here as plain Rust so they can be tested and
//! so both sides agree on the constants:
//!
//! - A direction is scrollable when content extends past that viewport edge.
//!   The right edge allows [`END_TOLERANCE`] pixels of slack, so sub-pixel
//!   rounding at the end of a row never leaves a live "next" button.
//! - One navigation step moves [`STEP_FRACTION`] of the visible width, clamped
//!   to the scrollable range. The browser animates it (`behavior: 'smooth'`).
//! - State is recomputed on every scroll and resize event, never polled.
//!
//! The constants reach the script through `data-step` / `data-tolerance`
//! attributes on the scroller root.

use crate::components::Icon;
use maud::{Markup, html};

/// Fraction of the visible width moved by one previous/next click.
pub const STEP_FRACTION: f64 = 0.8;

/// Slack, in CSS pixels, before the end of the row counts as reached.
pub const END_TOLERANCE: f64 = 10.0;

/// Layout numbers as the browser reports them for the scroll track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current horizontal offset (`scrollLeft`).
    pub scroll_left: f64,
    /// Total content width (`scrollWidth`).
    pub scroll_width: f64,
    /// Visible width (`clientWidth`).
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// Largest reachable `scroll_left`.
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Whether each navigation control is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollState {
    /// State baked into the static markup before the script has measured
    /// anything: at the start of the row, assuming there is more to the right.
    pub const BEFORE_LAYOUT: ScrollState = ScrollState {
        can_scroll_left: false,
        can_scroll_right: true,
    };

    pub fn from_metrics(m: ScrollMetrics) -> Self {
        Self {
            can_scroll_left: m.scroll_left > 0.0,
            can_scroll_right: m.scroll_left + m.client_width < m.scroll_width - END_TOLERANCE,
        }
    }

    pub fn can_scroll(self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.can_scroll_left,
            Direction::Right => self.can_scroll_right,
        }
    }
}

/// Where one navigation step in `direction` lands, clamped to the track.
pub fn step_target(m: ScrollMetrics, direction: Direction) -> f64 {
    let amount = m.client_width * STEP_FRACTION;
    let target = match direction {
        Direction::Left => m.scroll_left - amount,
        Direction::Right => m.scroll_left + amount,
    };
    target.clamp(0.0, m.max_scroll_left())
}

/// One scroller instance and its cached scroll position.
///
/// This is the reference model of the carousel behaviour. Nothing calls it at
/// runtime: `static/scroller.js` applies the same rules in the browser, reading
/// [`STEP_FRACTION`] and [`END_TOLERANCE`] from the attributes written by
/// [`render_scroller`]. Tests here pin the rules the script mirrors.
#[derive(Debug, Clone)]
pub struct Scroller {
    metrics: ScrollMetrics,
    state: ScrollState,
}

impl Scroller {
    /// Create from the initial layout; state is computed immediately.
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            metrics,
            state: ScrollState::from_metrics(metrics),
        }
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Scroll event: the track moved to `scroll_left`.
    pub fn on_scroll(&mut self, scroll_left: f64) -> ScrollState {
        self.metrics.scroll_left = scroll_left.clamp(0.0, self.metrics.max_scroll_left());
        self.recompute()
    }

    /// Resize event: new visible and content widths. The offset is clamped the
    /// way a browser clamps `scrollLeft` when the track grows.
    pub fn on_resize(&mut self, client_width: f64, scroll_width: f64) -> ScrollState {
        self.metrics.client_width = client_width;
        self.metrics.scroll_width = scroll_width;
        self.metrics.scroll_left = self
            .metrics
            .scroll_left
            .clamp(0.0, self.metrics.max_scroll_left());
        self.recompute()
    }

    /// Click on a control. Returns the offset to animate to, or `None` when
    /// that control is disabled. The position itself changes only when the
    /// resulting scroll events arrive through [`Scroller::on_scroll`].
    pub fn navigate(&self, direction: Direction) -> Option<f64> {
        self.state
            .can_scroll(direction)
            .then(|| step_target(self.metrics, direction))
    }

    fn recompute(&mut self) -> ScrollState {
        self.state = ScrollState::from_metrics(self.metrics);
        self.state
    }
}

/// Render a scroller around `content`.
///
/// `content` is laid out as direct children of the track, one per column.
pub fn render_scroller(id: &str, label: &str, show_controls: bool, content: Markup) -> Markup {
    let state = ScrollState::BEFORE_LAYOUT;
    html! {
        div.scroller id=(id) data-scroller
            data-step=(STEP_FRACTION.to_string()) data-tolerance=(END_TOLERANCE.to_string())
            data-can-scroll-left=(state.can_scroll_left.to_string())
            data-can-scroll-right=(state.can_scroll_right.to_string()) {
            div.scroller-track tabindex="0" role="region" aria-label=(label) {
                (content)
            }
            @if show_controls {
                button.scroller-btn.scroller-prev type="button" data-scroll="left"
                    aria-label="Scroll left" disabled[!state.can_scroll_left] {
                    (Icon::ChevronLeft.svg())
                }
                button.scroller-btn.scroller-next type="button" data-scroll="right"
                    aria-label="Scroll right" disabled[!state.can_scroll_right] {
                    (Icon::ChevronRight.svg())
                }
                div.scroller-fade.scroller-fade-left aria-hidden="true" {}
                div.scroller-fade.scroller-fade-right aria-hidden="true" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // ScrollState
    // =========================================================================

    #[test]
    fn content_equal_to_viewport_cannot_scroll() {
        let scroller = Scroller::new(ScrollMetrics::new(0.0, 800.0, 800.0));
        assert!(!scroller.state().can_scroll_left);
        assert!(!scroller.state().can_scroll_right);
    }

    #[test]
    fn content_narrower_than_viewport_cannot_scroll() {
        let state = ScrollState::from_metrics(ScrollMetrics::new(0.0, 500.0, 800.0));
        assert!(!state.can_scroll_left);
        assert!(!state.can_scroll_right);
    }

    #[test]
    fn overflow_at_start_scrolls_right_only() {
        let state = ScrollState::from_metrics(ScrollMetrics::new(0.0, 2000.0, 800.0));
        assert!(!state.can_scroll_left);
        assert!(state.can_scroll_right);
    }

    #[test]
    fn middle_of_row_scrolls_both_ways() {
        let state = ScrollState::from_metrics(ScrollMetrics::new(500.0, 2000.0, 800.0));
        assert!(state.can_scroll(Direction::Left));
        assert!(state.can_scroll(Direction::Right));
    }

    #[test]
    fn end_of_row_scrolls_left_only() {
        let state = ScrollState::from_metrics(ScrollMetrics::new(1200.0, 2000.0, 800.0));
        assert!(state.can_scroll_left);
        assert!(!state.can_scroll_right);
    }

    #[test]
    fn right_edge_tolerance() {
        // 9px of remaining content is within the tolerance
        let near = ScrollState::from_metrics(ScrollMetrics::new(1191.0, 2000.0, 800.0));
        assert!(!near.can_scroll_right);
        // 11px is not
        let far = ScrollState::from_metrics(ScrollMetrics::new(1189.0, 2000.0, 800.0));
        assert!(far.can_scroll_right);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[test]
    fn step_moves_eighty_percent_of_viewport() {
        let m = ScrollMetrics::new(0.0, 4000.0, 1000.0);
        assert_eq!(step_target(m, Direction::Right), 800.0);

        let m = ScrollMetrics::new(1600.0, 4000.0, 1000.0);
        assert_eq!(step_target(m, Direction::Left), 800.0);
    }

    #[test]
    fn step_clamps_to_track() {
        let m = ScrollMetrics::new(300.0, 4000.0, 1000.0);
        assert_eq!(step_target(m, Direction::Left), 0.0);

        let m = ScrollMetrics::new(2900.0, 4000.0, 1000.0);
        assert_eq!(step_target(m, Direction::Right), 3000.0);
    }

    #[test]
    fn navigate_disabled_direction_is_none() {
        let scroller = Scroller::new(ScrollMetrics::new(0.0, 2000.0, 800.0));
        assert_eq!(scroller.navigate(Direction::Left), None);
        assert_eq!(scroller.navigate(Direction::Right), Some(640.0));
    }

    #[test]
    fn scroll_events_recompute_state() {
        let mut scroller = Scroller::new(ScrollMetrics::new(0.0, 2000.0, 800.0));
        let target = scroller.navigate(Direction::Right).unwrap();
        let state = scroller.on_scroll(target);
        assert!(state.can_scroll_left);
        assert!(state.can_scroll_right);

        let state = scroller.on_scroll(1200.0);
        assert!(!state.can_scroll_right);
        assert_eq!(scroller.state(), state);
    }

    #[test]
    fn resize_recomputes_state() {
        let mut scroller = Scroller::new(ScrollMetrics::new(0.0, 2000.0, 800.0));
        assert!(scroller.state().can_scroll_right);

        // Viewport grows to fit all content
        let state = scroller.on_resize(2000.0, 2000.0);
        assert!(!state.can_scroll_left);
        assert!(!state.can_scroll_right);
    }

    #[test]
    fn resize_clamps_offset() {
        let mut scroller = Scroller::new(ScrollMetrics::new(1200.0, 2000.0, 800.0));
        scroller.on_resize(1500.0, 2000.0);
        assert_eq!(scroller.metrics().scroll_left, 500.0);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn render_with_controls() {
        let html = render_scroller("row", "Projects", true, html! { div { "card" } }).into_string();
        assert!(html.contains(r#"id="row""#));
        assert!(html.contains("data-scroller"));
        assert!(html.contains(r#"data-step="0.8""#));
        assert!(html.contains(r#"data-tolerance="10""#));
        assert!(html.contains(r#"aria-label="Scroll left""#));
        assert!(html.contains(r#"aria-label="Scroll right""#));
        assert!(html.contains("card"));
    }

    #[test]
    fn render_before_layout_disables_prev_only() {
        let html = render_scroller("row", "Projects", true, html! {}).into_string();
        let buttons: Vec<&str> = html
            .split("<button")
            .skip(1)
            .map(|rest| &rest[..rest.find('>').unwrap()])
            .collect();
        assert_eq!(buttons.len(), 2);
        assert!(buttons[0].contains("scroller-prev"));
        assert!(buttons[0].contains("disabled"));
        assert!(buttons[1].contains("scroller-next"));
        assert!(!buttons[1].contains("disabled"));
        assert!(html.contains(r#"data-can-scroll-left="false""#));
        assert!(html.contains(r#"data-can-scroll-right="true""#));
    }

    #[test]
    fn render_without_controls() {
        let html = render_scroller("row", "Projects", false, html! {}).into_string();
        assert!(!html.contains("<button"));
        assert!(!html.contains("scroller-fade"));
        assert!(html.contains("scroller-track"));
    }
}
