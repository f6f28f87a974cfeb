//! Page-level controller: routes document events to the navigation, theme,
//! portfolio, reveal, skill-bar and contact components and reports the side
//! effects the host must perform.

use std::time::Duration;

use chrono::Datelike;

use folio_relay::{RelayClient, RelayError, RelayResponse};
use folio_types::NavbarBackground;
use folio_types::ui::{
    ContactForm, MobileMenu, NavbarScroll, NotificationCenter, PortfolioFilter, Preloader, Rect,
    RevealTarget, ScrollSpy, SectionBounds, SectionSwitcher, SkillBar, SubmitButton, Viewport,
    smooth_scroll_target,
};

use crate::contact::submit_contact_form;
use crate::theme::ThemeController;

/// Geometry the host measured from the document.
#[derive(Debug, Clone)]
pub struct PageLayout {
    /// Scroll-spy sections in document order.
    pub sections: Vec<SectionBounds>,
    pub viewport: Viewport,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            viewport: Viewport {
                width: 1280.0,
                height: 800.0,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub enum SiteEvent {
    /// Document finished loading; hides the preloader and marks the nav link
    /// for the current scroll position.
    Loaded,
    ThemeButtonClicked,
    ThemeOptionClicked(String),
    HamburgerClicked,
    NavLinkClicked { href: String },
    AnchorClicked { href: String },
    DocumentClicked {
        inside_menu: bool,
        inside_theme_picker: bool,
    },
    EscapePressed,
    /// Window scrolled; `skill_bars` holds the current client rect of each bar.
    Scrolled {
        y: f64,
        skill_bars: Vec<Rect>,
    },
    Resized {
        viewport: Viewport,
        skill_bars: Vec<Rect>,
    },
    FilterClicked(usize),
    AsideLinkClicked(usize),
    /// Reveal-observer pass with the client rects of the observed cards and
    /// skill bars, in registration order.
    Observed {
        cards: Vec<Rect>,
        skill_bars: Vec<Rect>,
    },
    HireMeClicked {
        target: String,
        back_index: usize,
    },
    AsideTogglerClicked,
    NotificationClosed,
    /// Wall-clock time passed; drives the preloader, notification and
    /// skill-fill timers.
    Elapsed(Duration),
}

/// Work the host performs on the document in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEffect {
    ScrollTo(f64),
    SetSkillWidth { index: usize, width: String },
    /// Add the `animate` class to a card.
    RevealCard { index: usize },
    /// Add the `animate` class to a skill bar.
    RevealSkillBar { index: usize },
}

#[derive(Debug)]
pub struct SiteController {
    layout: PageLayout,
    scroll_y: f64,
    theme: ThemeController,
    menu: MobileMenu,
    spy: ScrollSpy,
    navbar: NavbarScroll,
    switcher: Option<SectionSwitcher>,
    filter: Option<PortfolioFilter>,
    skill_bars: Vec<SkillBar>,
    cards: Vec<RevealTarget>,
    form: ContactForm,
    button: SubmitButton,
    notifications: NotificationCenter,
    preloader: Preloader,
}

impl SiteController {
    #[must_use]
    pub fn new(theme: ThemeController) -> Self {
        Self {
            layout: PageLayout::default(),
            scroll_y: 0.0,
            theme,
            menu: MobileMenu::default(),
            spy: ScrollSpy::default(),
            navbar: NavbarScroll::default(),
            switcher: None,
            filter: None,
            skill_bars: Vec::new(),
            cards: Vec::new(),
            form: ContactForm::new(),
            button: SubmitButton::new("Send Message"),
            notifications: NotificationCenter::default(),
            preloader: Preloader::default(),
        }
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_section_switcher(mut self, switcher: SectionSwitcher) -> Self {
        self.switcher = Some(switcher);
        self
    }

    pub fn with_portfolio_filter(mut self, filters: Vec<String>) -> Self {
        self.filter = Some(PortfolioFilter::new(filters));
        self
    }

    pub fn with_skill_bars(mut self, widths: impl IntoIterator<Item = u8>) -> Self {
        self.skill_bars = widths.into_iter().map(SkillBar::new).collect();
        self
    }

    /// Observe `count` service/project cards for reveal-on-scroll.
    pub fn with_reveal_cards(mut self, count: usize) -> Self {
        self.cards = vec![RevealTarget::default(); count];
        self
    }

    pub fn with_contact_form(mut self, form: ContactForm, button: SubmitButton) -> Self {
        self.form = form;
        self.button = button;
        self
    }

    pub fn handle(&mut self, event: SiteEvent) -> Vec<SiteEffect> {
        let mut effects = Vec::new();
        match event {
            SiteEvent::Loaded => {
                self.preloader.on_load();
                self.spy.update(self.scroll_y, &self.layout.sections);
            }
            SiteEvent::ThemeButtonClicked => self.theme.toggle_picker(),
            SiteEvent::ThemeOptionClicked(option) => {
                self.theme.select(&option);
            }
            SiteEvent::HamburgerClicked => self.menu.toggle(),
            SiteEvent::NavLinkClicked { href } | SiteEvent::AnchorClicked { href } => {
                self.menu.close();
                if let Some(top) = smooth_scroll_target(&href, &self.layout.sections) {
                    effects.push(SiteEffect::ScrollTo(top));
                } else {
                    tracing::trace!(href = %href, "Anchor has no scroll target");
                }
            }
            SiteEvent::DocumentClicked {
                inside_menu,
                inside_theme_picker,
            } => {
                self.menu.on_document_click(inside_menu);
                if !inside_theme_picker {
                    self.theme.close_picker();
                }
            }
            SiteEvent::EscapePressed => {
                self.menu.close();
                self.theme.close_picker();
            }
            SiteEvent::Scrolled { y, skill_bars } => {
                self.scroll_y = y;
                self.spy.update(y, &self.layout.sections);
                self.navbar.on_scroll(y);
                self.check_skill_bars(&skill_bars, &mut effects);
            }
            SiteEvent::Resized {
                viewport,
                skill_bars,
            } => {
                self.layout.viewport = viewport;
                self.menu.on_resize(viewport.width);
                self.check_skill_bars(&skill_bars, &mut effects);
            }
            SiteEvent::Observed { cards, skill_bars } => {
                self.observe(&cards, &skill_bars, &mut effects);
            }
            SiteEvent::FilterClicked(index) => {
                if let Some(filter) = &mut self.filter
                    && filter.select(index).is_none()
                {
                    tracing::debug!(index, "Ignoring unknown portfolio filter");
                }
            }
            SiteEvent::AsideLinkClicked(index) => {
                let width = self.layout.viewport.width;
                if let Some(switcher) = &mut self.switcher
                    && !switcher.select_link(index, width)
                {
                    tracing::debug!(index, "Ignoring unknown aside link");
                }
            }
            SiteEvent::HireMeClicked { target, back_index } => {
                if let Some(switcher) = &mut self.switcher {
                    switcher.jump_to(&target, back_index);
                }
            }
            SiteEvent::AsideTogglerClicked => {
                if let Some(switcher) = &mut self.switcher {
                    switcher.toggle_aside();
                }
            }
            SiteEvent::NotificationClosed => self.notifications.dismiss(),
            SiteEvent::Elapsed(delta) => {
                self.preloader.advance(delta);
                self.notifications.advance(delta);
                for (index, bar) in self.skill_bars.iter_mut().enumerate() {
                    if let Some(width) = bar.advance(delta) {
                        effects.push(SiteEffect::SetSkillWidth { index, width });
                    }
                }
            }
        }
        effects
    }

    fn check_skill_bars(&mut self, rects: &[Rect], effects: &mut Vec<SiteEffect>) {
        let viewport = self.layout.viewport;
        for (index, (bar, rect)) in self.skill_bars.iter_mut().zip(rects).enumerate() {
            if let Some(width) = bar.check(rect, &viewport) {
                effects.push(SiteEffect::SetSkillWidth { index, width });
            }
        }
    }

    fn observe(&mut self, cards: &[Rect], bars: &[Rect], effects: &mut Vec<SiteEffect>) {
        let viewport = self.layout.viewport;
        for (index, (card, rect)) in self.cards.iter_mut().zip(cards).enumerate() {
            if card.observe(rect, &viewport) {
                effects.push(SiteEffect::RevealCard { index });
            }
        }
        for (index, (bar, rect)) in self.skill_bars.iter_mut().zip(bars).enumerate() {
            if bar.observe(rect, &viewport) {
                effects.push(SiteEffect::RevealSkillBar { index });
            }
        }
    }

    /// Post the contact form through `relay`; see [`submit_contact_form`].
    pub async fn submit_contact(
        &mut self,
        relay: &RelayClient,
    ) -> Result<RelayResponse, RelayError> {
        submit_contact_form(
            relay,
            &mut self.form,
            &mut self.button,
            &mut self.notifications,
        )
        .await
    }

    #[must_use]
    pub fn navbar_background(&self) -> NavbarBackground {
        self.theme.navbar_background(self.scroll_y)
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    #[must_use]
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    #[must_use]
    pub fn scroll_spy(&self) -> &ScrollSpy {
        &self.spy
    }

    #[must_use]
    pub fn navbar(&self) -> &NavbarScroll {
        &self.navbar
    }

    #[must_use]
    pub fn section_switcher(&self) -> Option<&SectionSwitcher> {
        self.switcher.as_ref()
    }

    #[must_use]
    pub fn portfolio_filter(&self) -> Option<&PortfolioFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn skill_bars(&self) -> &[SkillBar] {
        &self.skill_bars
    }

    #[must_use]
    pub fn reveal_cards(&self) -> &[RevealTarget] {
        &self.cards
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    #[must_use]
    pub fn submit_button(&self) -> &SubmitButton {
        &self.button
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    #[must_use]
    pub fn preloader(&self) -> &Preloader {
        &self.preloader
    }
}

/// Year printed in the footer.
#[must_use]
pub fn footer_year() -> i32 {
    chrono::Local::now().year()
}
