//! Mobile navigation menu (hamburger).

/// Viewports wider than this never show the mobile menu.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Whether the page body may scroll behind the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyScroll {
    /// `overflow: hidden` while the menu covers the page.
    Locked,
    Unlocked,
}

impl BodyScroll {
    /// Value for the body's `overflow` style; empty restores the stylesheet default.
    #[must_use]
    pub const fn overflow(self) -> &'static str {
        match self {
            Self::Locked => "hidden",
            Self::Unlocked => "",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the hamburger's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    #[must_use]
    pub fn body_scroll(&self) -> BodyScroll {
        if self.open {
            BodyScroll::Locked
        } else {
            BodyScroll::Unlocked
        }
    }

    /// A document click closes the menu unless it landed on the hamburger or the menu itself.
    pub fn on_document_click(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.close();
        }
    }

    pub fn on_resize(&mut self, viewport_width: f64) {
        if viewport_width > MOBILE_BREAKPOINT {
            self.close();
        }
    }
}
