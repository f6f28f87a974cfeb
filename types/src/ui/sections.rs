//! Aside navigation that swaps full-page sections instead of scrolling.

/// Below this viewport width the aside collapses after a selection.
pub const ASIDE_BREAKPOINT: f64 = 1200.0;

/// Section visibility driven by the aside nav.
///
/// Nav links and sections are paired by position: link `i` belongs to
/// section `i`. The previously shown section keeps a `back-section` marker so
/// the stylesheet can animate it out.
#[derive(Debug, Clone)]
pub struct SectionSwitcher {
    links: Vec<String>,
    sections: Vec<String>,
    active_link: Option<usize>,
    active_section: Option<usize>,
    back_section: Option<usize>,
    aside_open: bool,
}

impl SectionSwitcher {
    /// `links` holds each nav link's target section id, `sections` the
    /// section ids in document order. The first link and section start active.
    #[must_use]
    pub fn new(links: Vec<String>, sections: Vec<String>) -> Self {
        let active_link = (!links.is_empty()).then_some(0);
        let active_section = (!sections.is_empty()).then_some(0);
        Self {
            links,
            sections,
            active_link,
            active_section,
            back_section: None,
            aside_open: false,
        }
    }

    /// Handle a click on nav link `link`. Returns `false` for an unknown link.
    pub fn select_link(&mut self, link: usize, viewport_width: f64) -> bool {
        let Some(target) = self.links.get(link).cloned() else {
            return false;
        };

        self.back_section = self
            .active_link
            .filter(|&index| index < self.sections.len());
        self.active_link = Some(link);
        self.show_section(&target);

        if viewport_width < ASIDE_BREAKPOINT {
            self.toggle_aside();
        }
        true
    }

    /// Jump straight to `target` (the "hire me" call to action), marking the
    /// section at `back_index` as the one being left.
    pub fn jump_to(&mut self, target: &str, back_index: usize) {
        self.show_section(target);
        self.active_link = self.links.iter().position(|id| id == target);
        self.back_section = (back_index < self.sections.len()).then_some(back_index);
    }

    /// Open or close the aside; every section shifts along with it.
    pub fn toggle_aside(&mut self) {
        self.aside_open = !self.aside_open;
    }

    fn show_section(&mut self, target: &str) {
        self.active_section = self.sections.iter().position(|id| id == target);
    }

    #[must_use]
    pub fn aside_open(&self) -> bool {
        self.aside_open
    }

    #[must_use]
    pub fn active_link(&self) -> Option<&str> {
        self.active_link.map(|index| self.links[index].as_str())
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section
            .map(|index| self.sections[index].as_str())
    }

    #[must_use]
    pub fn back_section(&self) -> Option<&str> {
        self.back_section.map(|index| self.sections[index].as_str())
    }

    #[must_use]
    pub fn is_section_active(&self, id: &str) -> bool {
        self.active_section() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switcher() -> SectionSwitcher {
        let ids: Vec<String> = ["home", "about", "portfolio", "contact"]
            .into_iter()
            .map(String::from)
            .collect();
        SectionSwitcher::new(ids.clone(), ids)
    }

    #[test]
    fn selecting_marks_previous_as_back_section() {
        let mut nav = switcher();
        assert!(nav.select_link(2, 1400.0));

        assert_eq!(nav.active_link(), Some("portfolio"));
        assert!(nav.is_section_active("portfolio"));
        assert!(!nav.is_section_active("home"));
        assert_eq!(nav.back_section(), Some("home"));
        assert!(!nav.aside_open());

        nav.select_link(1, 1400.0);
        assert_eq!(nav.back_section(), Some("portfolio"));
    }

    #[test]
    fn narrow_viewport_toggles_aside() {
        let mut nav = switcher();
        nav.toggle_aside();
        assert!(nav.aside_open());
        nav.select_link(1, 800.0);
        assert!(!nav.aside_open());
    }

    #[test]
    fn unknown_link_is_ignored() {
        let mut nav = switcher();
        assert!(!nav.select_link(9, 1400.0));
        assert_eq!(nav.active_link(), Some("home"));
    }

    #[test]
    fn jump_updates_link_and_back_section() {
        let mut nav = switcher();
        nav.jump_to("contact", 1);
        assert_eq!(nav.active_section(), Some("contact"));
        assert_eq!(nav.active_link(), Some("contact"));
        assert_eq!(nav.back_section(), Some("about"));
    }
}
