//! Scroll-driven navigation: active-link highlighting, navbar hide/show and
//! anchor scroll targets.

/// Distance below the top of the viewport used to find the current section.
pub const SCROLL_SPY_OFFSET: f64 = 100.0;

/// Height of the fixed header; anchor scrolls stop this far above a section.
pub const HEADER_OFFSET: f64 = 70.0;

const NAVBAR_SHADOW_AFTER: f64 = 100.0;
const NAVBAR_HIDE_AFTER: f64 = 200.0;

/// Vertical extent of a page section, in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }

    /// `href` of the nav link pointing at this section.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Tracks which nav link is highlighted for the current scroll position.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    /// Re-evaluate the active section. When several sections contain the
    /// marker the last one in document order wins; when none does the previous
    /// highlight is kept.
    pub fn update(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
        let marker = scroll_y + SCROLL_SPY_OFFSET;
        if let Some(section) = sections.iter().rev().find(|s| s.contains(marker)) {
            self.active = Some(section.id.clone());
        }
        self.active.as_deref()
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the link with this `href` should carry the `active` class.
    #[must_use]
    pub fn is_active_link(&self, href: &str) -> bool {
        match (&self.active, href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}

/// Navbar reaction to scrolling: drop shadow and hide-on-scroll-down.
#[derive(Debug, Clone, Default)]
pub struct NavbarScroll {
    last_scroll_top: f64,
    shadow: bool,
    hidden: bool,
}

impl NavbarScroll {
    pub fn on_scroll(&mut self, scroll_top: f64) {
        if scroll_top > NAVBAR_SHADOW_AFTER {
            self.shadow = true;
            self.hidden = scroll_top > self.last_scroll_top && scroll_top > NAVBAR_HIDE_AFTER;
        } else {
            self.shadow = false;
            self.hidden = false;
        }
        self.last_scroll_top = scroll_top;
    }

    #[must_use]
    pub fn has_shadow(&self) -> bool {
        self.shadow
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Value for the navbar's `transform` style.
    #[must_use]
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Scroll destination for an in-page anchor, or `None` when the anchor is
/// `"#"` or names no known section.
#[must_use]
pub fn smooth_scroll_target(href: &str, sections: &[SectionBounds]) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.top - HEADER_OFFSET)
}
