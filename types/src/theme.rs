//! Color themes and the theme picker.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page color theme, applied as the document's `data-theme`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    /// Any other palette shipped by the stylesheet (e.g. `"ocean"`).
    Named(String),
}

impl Theme {
    /// Parse a theme name. Blank names resolve to [`Theme::Default`].
    ///
    /// Names are case-sensitive: `"DARK"` is a named palette, not [`Theme::Dark`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "default" => Self::Default,
            "dark" => Self::Dark,
            name => Self::Named(name.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Navbar backdrop for this theme.
    ///
    /// The backdrop turns slightly more opaque once the page is scrolled.
    #[must_use]
    pub const fn navbar_background(&self, scrolled: bool) -> NavbarBackground {
        let alpha_percent = if scrolled { 98 } else { 95 };
        if self.is_dark() {
            NavbarBackground {
                rgb: (31, 41, 55),
                alpha_percent,
            }
        } else {
            NavbarBackground {
                rgb: (255, 255, 255),
                alpha_percent,
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Theme> for String {
    fn from(value: Theme) -> Self {
        value.as_str().to_string()
    }
}

/// CSS `rgba(...)` backdrop color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarBackground {
    pub rgb: (u8, u8, u8),
    pub alpha_percent: u8,
}

impl fmt::Display for NavbarBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb;
        write!(
            f,
            "rgba({r}, {g}, {b}, {}.{:02})",
            self.alpha_percent / 100,
            self.alpha_percent % 100
        )
    }
}

/// Dropdown listing the available themes.
#[derive(Debug, Clone, Default)]
pub struct ThemePicker {
    open: bool,
}

impl ThemePicker {
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

    /// Pick an option; the picker closes and the chosen theme is returned.
    pub fn select(&mut self, option: &str) -> Theme {
        self.open = false;
        Theme::parse(option)
    }

    /// Whether the option button for `option` should render as selected.
    #[must_use]
    pub fn is_highlighted(option: &str, current: &Theme) -> bool {
        Theme::parse(option) == *current
    }
}
