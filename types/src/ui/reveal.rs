//! Reveal-on-scroll: cards and skill bars gain the `animate` class once a
//! tenth of them enters the viewport.

use std::time::Duration;

use super::skills::{Rect, Viewport};

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// The bottom of the viewport is pulled in by this much when testing
/// visibility, so elements reveal slightly after they scroll in.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// Delay between a skill bar being revealed and its width being set.
pub const SKILL_FILL_DELAY: Duration = Duration::from_millis(300);

impl Viewport {
    /// Share of `rect` inside the viewport shrunk by `bottom_margin`.
    ///
    /// Zero-area elements (an empty skill bar) count as fully visible while
    /// they sit inside the box, edges included.
    #[must_use]
    pub fn intersection_ratio(&self, rect: &Rect, bottom_margin: f64) -> f64 {
        let bottom_edge = (self.height - bottom_margin).max(0.0);
        let width = rect.right - rect.left;
        let height = rect.bottom - rect.top;

        if width <= 0.0 || height <= 0.0 {
            let inside = rect.left >= 0.0
                && rect.right <= self.width
                && rect.top >= 0.0
                && rect.bottom <= bottom_edge;
            return if inside { 1.0 } else { 0.0 };
        }

        let visible_w = rect.right.min(self.width) - rect.left.max(0.0);
        let visible_h = rect.bottom.min(bottom_edge) - rect.top.max(0.0);
        if visible_w <= 0.0 || visible_h <= 0.0 {
            return 0.0;
        }
        (visible_w * visible_h) / (width * height)
    }
}

/// One observed element. Revealing is one-way.
#[derive(Debug, Clone, Default)]
pub struct RevealTarget {
    revealed: bool,
}

impl RevealTarget {
    /// Re-test the element. Returns `true` only on the call that reveals it.
    pub fn observe(&mut self, rect: &Rect, viewport: &Viewport) -> bool {
        if self.revealed {
            return false;
        }
        if viewport.intersection_ratio(rect, REVEAL_BOTTOM_MARGIN) >= REVEAL_THRESHOLD {
            self.revealed = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// `animate` once revealed.
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.revealed { "animate" } else { "" }
    }
}
