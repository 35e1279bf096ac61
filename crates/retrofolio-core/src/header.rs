#![forbid(unsafe_code)]

//! Header reaction to scrolling.
//!
//! The header deepens its backdrop blur once the page is scrolled past a
//! threshold, hides while the user scrolls down, and reappears on any upward
//! scroll.

/// Backdrop blur near the top of the page (px).
pub const RESTING_BLUR_PX: u32 = 10;

/// Backdrop blur once scrolled past the threshold (px).
pub const SCROLLED_BLUR_PX: u32 = 15;

/// Header presentation for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFrame {
    pub blur_px: u32,
    pub hidden: bool,
}

impl HeaderFrame {
    #[must_use]
    pub fn backdrop_filter(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }

    #[must_use]
    pub const fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Remembers the previous scroll offset to tell direction.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderTracker {
    last_scroll_y: f64,
    blur_threshold: f64,
    hide_threshold: f64,
}

impl HeaderTracker {
    #[must_use]
    pub fn new(initial_scroll_y: f64, blur_threshold: f64, hide_threshold: f64) -> Self {
        Self {
            last_scroll_y: initial_scroll_y,
            blur_threshold,
            hide_threshold,
        }
    }

    /// Consume a new scroll offset.
    pub fn observe(&mut self, scroll_y: f64) -> HeaderFrame {
        let blur_px = if scroll_y > self.blur_threshold {
            SCROLLED_BLUR_PX
        } else {
            RESTING_BLUR_PX
        };
        let hidden = scroll_y > self.last_scroll_y && scroll_y > self.hide_threshold;
        self.last_scroll_y = scroll_y;
        HeaderFrame { blur_px, hidden }
    }

    #[must_use]
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }
}
