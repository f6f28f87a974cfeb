//! Skill progress bars that fill once they scroll fully into view, or a
//! short delay after the reveal observer first sees them.

use std::time::Duration;

use super::animation::EffectTimer;
use super::reveal::{RevealTarget, SKILL_FILL_DELAY};

/// Client rectangle of an element, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn fully_contains(&self, rect: &Rect) -> bool {
        rect.top >= 0.0
            && rect.left >= 0.0
            && rect.bottom <= self.height
            && rect.right <= self.width
    }
}

#[derive(Debug, Clone)]
pub struct SkillBar {
    width_percent: u8,
    animated: bool,
    reveal: RevealTarget,
    pending_fill: Option<EffectTimer>,
}

impl SkillBar {
    /// `width_percent` comes from the bar's `data-width`; values above 100 are clamped.
    #[must_use]
    pub fn new(width_percent: u8) -> Self {
        Self {
            width_percent: width_percent.min(100),
            animated: false,
            reveal: RevealTarget::default(),
            pending_fill: None,
        }
    }

    fn fill(&mut self) -> String {
        self.animated = true;
        self.pending_fill = None;
        format!("{}%", self.width_percent)
    }

    /// Check the bar against the viewport. Returns the CSS width to apply the
    /// first time the bar is fully visible, and `None` ever after.
    pub fn check(&mut self, rect: &Rect, viewport: &Viewport) -> Option<String> {
        if self.animated || !viewport.fully_contains(rect) {
            return None;
        }
        Some(self.fill())
    }

    /// Reveal-observer pass. The first time the bar crosses the reveal
    /// threshold it gains the `animate` class and its fill is scheduled
    /// [`SKILL_FILL_DELAY`] later. Returns `true` on that call.
    pub fn observe(&mut self, rect: &Rect, viewport: &Viewport) -> bool {
        if !self.reveal.observe(rect, viewport) {
            return false;
        }
        if !self.animated {
            self.pending_fill = Some(EffectTimer::new(SKILL_FILL_DELAY));
        }
        true
    }

    /// Advance a scheduled fill; yields the CSS width when it comes due.
    pub fn advance(&mut self, delta: Duration) -> Option<String> {
        let timer = self.pending_fill.as_mut()?;
        timer.advance(delta);
        timer.is_finished().then(|| self.fill())
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }
}
