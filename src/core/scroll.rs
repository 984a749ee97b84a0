//! Scroll-driven page state
//!
//! Tracks whether the navigation bar should turn translucent and when the
//! hero headline should replay its typing animation. The browser listener in
//! the landing page feeds raw geometry in; everything here is plain data so
//! it can be exercised without a DOM.

/// Vertical offset (px) past which the navigation bar becomes translucent
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Vertical extent of an element relative to the viewport, as reported by
/// `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalBounds {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether any part of the element overlaps a viewport of the given
    /// height. Edges touching the viewport count as overlapping.
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top <= viewport_height && self.bottom >= 0.0
    }
}

/// Geometry captured from one scroll event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    /// `window.scrollY`
    pub offset: f64,
    /// `window.innerHeight`
    pub viewport_height: f64,
    /// Hero bounds, `None` while the hero is not mounted
    pub hero: Option<VerticalBounds>,
}

/// Whether a scroll offset is past the navbar threshold
pub fn is_past_threshold(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

/// State owned by the landing page and mutated only on scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    scrolled: bool,
    replay: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one scroll event.
    ///
    /// Returns `true` if the headline replay key flipped.
    pub fn apply(&mut self, sample: ScrollSample) -> bool {
        self.scrolled = is_past_threshold(sample.offset);

        match sample.hero {
            Some(bounds) if bounds.intersects_viewport(sample.viewport_height) => {
                self.replay = !self.replay;
                true
            }
            _ => false,
        }
    }

    /// Navbar translucency flag
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Raw replay toggle
    pub fn replay(&self) -> bool {
        self.replay
    }

    /// Key used to remount the headline animation
    pub fn headline_key(&self) -> &'static str {
        headline_key(self.replay)
    }
}

/// Map the replay toggle to the headline's remount key
pub fn headline_key(replay: bool) -> &'static str {
    if replay { "typing-1" } else { "typing-2" }
}

/// Navbar background classes for the given scroll flag
pub fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed w-full z-50 transition-all duration-300 bg-[#0E1015]/90 backdrop-blur-sm"
    } else {
        "fixed w-full z-50 transition-all duration-300"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(offset: f64, hero: Option<VerticalBounds>) -> ScrollSample {
        ScrollSample {
            offset,
            viewport_height: 800.0,
            hero,
        }
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(49.9));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(50.1));
        assert!(is_past_threshold(5000.0));
    }

    #[test]
    fn test_navbar_transparent_at_or_below_threshold() {
        for offset in [0.0, 10.0, 25.5, 50.0] {
            let mut state = ScrollState::new();
            state.apply(sample(offset, None));
            assert!(!state.is_scrolled(), "offset {offset}");
            assert!(!navbar_class(state.is_scrolled()).contains("backdrop-blur"));
        }
    }

    #[test]
    fn test_navbar_translucent_above_threshold() {
        for offset in [51.0, 100.0, 1200.0] {
            let mut state = ScrollState::new();
            state.apply(sample(offset, None));
            assert!(state.is_scrolled(), "offset {offset}");
            assert!(navbar_class(state.is_scrolled()).contains("bg-[#0E1015]/90"));
        }
    }

    #[test]
    fn test_intersection_edges_inclusive() {
        assert!(VerticalBounds::new(800.0, 1600.0).intersects_viewport(800.0));
        assert!(VerticalBounds::new(-800.0, 0.0).intersects_viewport(800.0));
        assert!(!VerticalBounds::new(800.1, 1600.0).intersects_viewport(800.0));
        assert!(!VerticalBounds::new(-900.0, -0.5).intersects_viewport(800.0));
    }

    #[test]
    fn test_replay_flips_when_hero_visible() {
        let mut state = ScrollState::new();
        let before = state.headline_key();

        let flipped = state.apply(sample(10.0, Some(VerticalBounds::new(-10.0, 790.0))));

        assert!(flipped);
        assert_ne!(state.headline_key(), before);
    }

    #[test]
    fn test_replay_untouched_when_hero_out_of_view() {
        let mut state = ScrollState::new();
        let flipped = state.apply(sample(
            2000.0,
            Some(VerticalBounds::new(-2000.0, -1200.0)),
        ));

        assert!(!flipped);
        assert_eq!(state.headline_key(), "typing-2");
    }

    #[test]
    fn test_unmounted_hero_skips_replay() {
        let mut state = ScrollState::new();
        let flipped = state.apply(sample(100.0, None));

        assert!(!flipped);
        assert!(!state.replay());
        assert!(state.is_scrolled());
    }

    #[test]
    fn test_reentry_changes_key_regardless_of_history() {
        let mut state = ScrollState::new();
        let hidden = Some(VerticalBounds::new(-3000.0, -2200.0));
        let visible = Some(VerticalBounds::new(-100.0, 700.0));

        // Arbitrary history: some in view, some out of view
        state.apply(sample(20.0, visible));
        state.apply(sample(3000.0, hidden));
        state.apply(sample(3100.0, hidden));

        let key_before = state.headline_key();
        assert!(state.apply(sample(100.0, visible)));
        assert_ne!(state.headline_key(), key_before);
    }

    #[test]
    fn test_headline_key_values() {
        assert_eq!(headline_key(true), "typing-1");
        assert_eq!(headline_key(false), "typing-2");
    }
}
