//! Near-end-of-list triggers.
//!
//! Two interchangeable strategies decide when the next page should be
//! requested: a sentinel-visibility observer and a scroll-fraction
//! poller. Both are edge-triggered over a [`Viewport`] snapshot so
//! that polling many times per second while the condition holds fires
//! exactly once per crossing. The loading gate itself lives in the
//! session, not here.

/// Default scrolled fraction past which [`ScrollTrigger`] fires.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 0.9;

/// Scroll-geometry snapshot observed by the triggers.
///
/// All values are in the same (arbitrary) length unit. The feed does
/// not own the viewport; the presentation layer reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Distance scrolled from the top of the content.
    pub scroll_top: f64,
    /// Height of the visible window.
    pub viewport_height: f64,
    /// Total height of the rendered content.
    pub content_height: f64,
}

impl Viewport {
    /// Fraction of the content above the bottom edge of the window,
    /// in `0.0..=1.0`. Content shorter than the window counts as
    /// fully scrolled.
    pub fn scrolled_fraction(&self) -> f64 {
        if self.content_height <= 0.0 {
            return 1.0;
        }
        ((self.scroll_top + self.viewport_height) / self.content_height).clamp(0.0, 1.0)
    }

    /// Whether the bottom edge of the content is inside the window.
    pub fn bottom_visible(&self) -> bool {
        self.content_height <= self.scroll_top + self.viewport_height
    }
}

/// The event source that initiates loading of the next page.
///
/// `observe` is called with each fresh viewport snapshot and returns
/// true at most once per crossing of the strategy's threshold.
pub trait NearEndTrigger: Send {
    /// Feed one viewport snapshot; true means "request the next page".
    fn observe(&mut self, viewport: &Viewport) -> bool;
}

// ---------------------------------------------------------------------------
// Sentinel visibility
// ---------------------------------------------------------------------------

/// Intersection-observer analogue: a zero-height sentinel sits after
/// the last card and the trigger fires on the edge where it becomes
/// visible (threshold 1.0).
///
/// Starts not-visible, so the first observation of an empty or short
/// list fires immediately -- that is what kicks off the initial page
/// load at mount.
#[derive(Debug, Default)]
pub struct SentinelTrigger {
    visible: bool,
}

impl SentinelTrigger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NearEndTrigger for SentinelTrigger {
    fn observe(&mut self, viewport: &Viewport) -> bool {
        let now_visible = viewport.bottom_visible();
        let fired = now_visible && !self.visible;
        self.visible = now_visible;
        fired
    }
}

// ---------------------------------------------------------------------------
// Scroll fraction
// ---------------------------------------------------------------------------

/// Scroll-position poller: fires when the scrolled fraction crosses a
/// threshold (default 0.9), then re-arms only after the position drops
/// back below it.
#[derive(Debug)]
pub struct ScrollTrigger {
    threshold: f64,
    past_threshold: bool,
}

impl ScrollTrigger {
    /// `threshold` is the scrolled fraction in `0.0..=1.0` past which
    /// the trigger fires.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past_threshold: false,
        }
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl NearEndTrigger for ScrollTrigger {
    fn observe(&mut self, viewport: &Viewport) -> bool {
        let past = viewport.scrolled_fraction() >= self.threshold;
        let fired = past && !self.past_threshold;
        self.past_threshold = past;
        fired
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_top: f64, viewport_height: f64, content_height: f64) -> Viewport {
        Viewport {
            scroll_top,
            viewport_height,
            content_height,
        }
    }

    // -- Viewport ------------------------------------------------------------

    #[test]
    fn fraction_at_top_of_long_content() {
        let v = viewport(0.0, 600.0, 6000.0);
        assert!((v.scrolled_fraction() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn fraction_at_bottom_is_one() {
        let v = viewport(5400.0, 600.0, 6000.0);
        assert!((v.scrolled_fraction() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_content_counts_as_fully_scrolled() {
        let v = viewport(0.0, 600.0, 0.0);
        assert_eq!(v.scrolled_fraction(), 1.0);
        assert!(v.bottom_visible());
    }

    #[test]
    fn short_content_bottom_is_visible() {
        let v = viewport(0.0, 600.0, 300.0);
        assert!(v.bottom_visible());
    }

    // -- SentinelTrigger -----------------------------------------------------

    #[test]
    fn sentinel_fires_on_becoming_visible() {
        let mut trigger = SentinelTrigger::new();
        assert!(trigger.observe(&viewport(5400.0, 600.0, 6000.0)));
    }

    #[test]
    fn sentinel_fires_once_while_it_stays_visible() {
        let mut trigger = SentinelTrigger::new();
        let bottom = viewport(5400.0, 600.0, 6000.0);
        assert!(trigger.observe(&bottom));
        assert!(!trigger.observe(&bottom));
        assert!(!trigger.observe(&bottom));
    }

    #[test]
    fn sentinel_rearms_after_scrolling_away() {
        let mut trigger = SentinelTrigger::new();
        let bottom = viewport(5400.0, 600.0, 6000.0);
        let middle = viewport(2000.0, 600.0, 6000.0);

        assert!(trigger.observe(&bottom));
        assert!(!trigger.observe(&middle));
        assert!(trigger.observe(&bottom));
    }

    #[test]
    fn sentinel_fires_at_mount_with_empty_content() {
        let mut trigger = SentinelTrigger::new();
        assert!(trigger.observe(&viewport(0.0, 600.0, 0.0)));
    }

    // -- ScrollTrigger -------------------------------------------------------

    #[test]
    fn scroll_fires_past_threshold() {
        let mut trigger = ScrollTrigger::default();
        // 5000 + 600 of 6000 => 0.933
        assert!(trigger.observe(&viewport(5000.0, 600.0, 6000.0)));
    }

    #[test]
    fn scroll_below_threshold_does_not_fire() {
        let mut trigger = ScrollTrigger::default();
        // 2000 + 600 of 6000 => 0.433
        assert!(!trigger.observe(&viewport(2000.0, 600.0, 6000.0)));
    }

    #[test]
    fn scroll_polling_past_threshold_fires_once() {
        let mut trigger = ScrollTrigger::default();
        let near_bottom = viewport(5000.0, 600.0, 6000.0);

        assert!(trigger.observe(&near_bottom));
        for _ in 0..10 {
            assert!(!trigger.observe(&near_bottom));
        }
    }

    #[test]
    fn scroll_rearms_below_threshold() {
        let mut trigger = ScrollTrigger::default();
        let near_bottom = viewport(5000.0, 600.0, 6000.0);
        let middle = viewport(2000.0, 600.0, 6000.0);

        assert!(trigger.observe(&near_bottom));
        assert!(!trigger.observe(&middle));
        assert!(trigger.observe(&near_bottom));
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut trigger = ScrollTrigger::new(0.5);
        // 0.433 < 0.5
        assert!(!trigger.observe(&viewport(2000.0, 600.0, 6000.0)));
        // 0.6 >= 0.5
        assert!(trigger.observe(&viewport(3000.0, 600.0, 6000.0)));
    }
}
