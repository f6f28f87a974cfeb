//! Page-level event routing

use std::time::Duration;

use folio_engine::{PageLayout, SiteController, SiteEffect, SiteEvent, Theme, ThemeController};
use folio_types::ui::{
    BodyScroll, ItemVisibility, Rect, SKILL_FILL_DELAY, SectionBounds, SectionSwitcher, Viewport,
};

fn layout() -> PageLayout {
    PageLayout {
        sections: vec![
            SectionBounds::new("home", 0.0, 500.0),
            SectionBounds::new("about", 500.0, 500.0),
            SectionBounds::new("contact", 1000.0, 400.0),
        ],
        viewport: Viewport {
            width: 1400.0,
            height: 900.0,
        },
    }
}

fn site() -> SiteController {
    SiteController::new(ThemeController::init(None, Theme::Default))
        .with_layout(layout())
}

fn scroll(site: &mut SiteController, y: f64) -> Vec<SiteEffect> {
    site.handle(SiteEvent::Scrolled {
        y,
        skill_bars: Vec::new(),
    })
}

#[test]
fn scroll_spy_tracks_section_boundaries() {
    let mut site = site();

    scroll(&mut site, 0.0);
    assert_eq!(site.scroll_spy().active(), Some("home"));
    assert!(site.scroll_spy().is_active_link("#home"));

    // The marker is scrollY + 100: 399 + 100 is still inside home.
    scroll(&mut site, 399.0);
    assert_eq!(site.scroll_spy().active(), Some("home"));
    scroll(&mut site, 400.0);
    assert_eq!(site.scroll_spy().active(), Some("about"));

    scroll(&mut site, 950.0);
    assert_eq!(site.scroll_spy().active(), Some("contact"));

    // Past the last section the previous highlight stays.
    scroll(&mut site, 5_000.0);
    assert_eq!(site.scroll_spy().active(), Some("contact"));
    assert!(!site.scroll_spy().is_active_link("#about"));
}

#[test]
fn navbar_hides_on_scroll_down_and_returns_on_scroll_up() {
    let mut site = site();

    scroll(&mut site, 150.0);
    assert!(site.navbar().has_shadow());
    assert!(!site.navbar().is_hidden());

    scroll(&mut site, 300.0);
    assert!(site.navbar().is_hidden());
    assert_eq!(site.navbar().transform(), "translateY(-100%)");

    scroll(&mut site, 250.0);
    assert!(!site.navbar().is_hidden());
    assert_eq!(site.navbar().transform(), "translateY(0)");

    scroll(&mut site, 40.0);
    assert!(!site.navbar().has_shadow());
    assert_eq!(
        site.navbar_background().to_string(),
        "rgba(255, 255, 255, 0.95)"
    );
}

#[test]
fn mobile_menu_lifecycle() {
    let mut site = site();

    site.handle(SiteEvent::HamburgerClicked);
    assert_eq!(site.menu().aria_expanded(), "true");
    assert_eq!(site.menu().body_scroll().overflow(), "hidden");

    site.handle(SiteEvent::DocumentClicked {
        inside_menu: true,
        inside_theme_picker: false,
    });
    assert!(site.menu().is_open());

    site.handle(SiteEvent::Resized {
        viewport: Viewport {
            width: 1024.0,
            height: 768.0,
        },
        skill_bars: Vec::new(),
    });
    assert_eq!(site.menu().aria_expanded(), "false");
    assert_eq!(site.menu().body_scroll(), BodyScroll::Unlocked);
}

#[test]
fn nav_link_scrolls_below_fixed_header() {
    let mut site = site();
    site.handle(SiteEvent::HamburgerClicked);

    let effects = site.handle(SiteEvent::NavLinkClicked {
        href: "#contact".into(),
    });
    assert_eq!(effects, [SiteEffect::ScrollTo(930.0)]);
    assert!(!site.menu().is_open());

    let effects = site.handle(SiteEvent::AnchorClicked {
        href: "#missing".into(),
    });
    assert!(effects.is_empty());
}

#[test]
fn portfolio_filter_all_shows_everything() {
    let mut site = site().with_portfolio_filter(vec![
        "all".into(),
        "web".into(),
        "mobile".into(),
    ]);

    site.handle(SiteEvent::FilterClicked(2));
    let filter = site.portfolio_filter().unwrap();
    assert_eq!(filter.visibility("mobile"), ItemVisibility::Show);
    assert_eq!(filter.visibility("web").class(), "hide");

    site.handle(SiteEvent::FilterClicked(0));
    let filter = site.portfolio_filter().unwrap();
    assert_eq!(filter.active_index(), 0);
    assert_eq!(filter.visibility("web"), ItemVisibility::Show);

    site.handle(SiteEvent::FilterClicked(9));
    assert_eq!(site.portfolio_filter().unwrap().active_index(), 0);
}

#[test]
fn hire_me_marks_back_section() {
    let ids: Vec<String> = ["home", "about", "services", "contact"]
        .into_iter()
        .map(String::from)
        .collect();
    let mut site = site().with_section_switcher(SectionSwitcher::new(ids.clone(), ids));

    site.handle(SiteEvent::AsideLinkClicked(1));
    site.handle(SiteEvent::HireMeClicked {
        target: "contact".into(),
        back_index: 1,
    });

    let switcher = site.section_switcher().unwrap();
    assert_eq!(switcher.active_section(), Some("contact"));
    assert_eq!(switcher.active_link(), Some("contact"));
    assert_eq!(switcher.back_section(), Some("about"));
    // Wide viewport: selecting a link leaves the aside alone.
    assert!(!switcher.aside_open());

    site.handle(SiteEvent::AsideTogglerClicked);
    assert!(site.section_switcher().unwrap().aside_open());
}

#[test]
fn skill_bars_animate_only_once() {
    let mut site = site().with_skill_bars([90]);
    let visible = Rect {
        top: 100.0,
        left: 0.0,
        bottom: 120.0,
        right: 600.0,
    };

    let effects = site.handle(SiteEvent::Scrolled {
        y: 800.0,
        skill_bars: vec![visible],
    });
    assert_eq!(
        effects,
        [SiteEffect::SetSkillWidth {
            index: 0,
            width: "90%".into()
        }]
    );
    assert!(site.skill_bars()[0].is_animated());

    let effects = site.handle(SiteEvent::Scrolled {
        y: 810.0,
        skill_bars: vec![visible],
    });
    assert!(effects.is_empty());
}

#[test]
fn reveal_observer_fills_bars_after_delay() {
    let mut site = site().with_reveal_cards(1).with_skill_bars([75, 30]);
    let bar = |top: f64| Rect {
        top,
        left: 0.0,
        bottom: top + 20.0,
        right: 600.0,
    };
    // Viewport is 900px tall, so the reveal edge is at 850px.
    let card = Rect {
        top: 830.0,
        left: 0.0,
        bottom: 1030.0,
        right: 400.0,
    };

    let effects = site.handle(SiteEvent::Observed {
        cards: vec![card],
        skill_bars: vec![bar(400.0), bar(845.0)],
    });
    assert_eq!(
        effects,
        [
            SiteEffect::RevealCard { index: 0 },
            SiteEffect::RevealSkillBar { index: 0 },
            SiteEffect::RevealSkillBar { index: 1 },
        ]
    );

    // The scroll check fills the first bar before its delay runs out.
    let effects = site.handle(SiteEvent::Scrolled {
        y: 0.0,
        skill_bars: vec![bar(400.0), bar(1200.0)],
    });
    assert_eq!(
        effects,
        [SiteEffect::SetSkillWidth {
            index: 0,
            width: "75%".into()
        }]
    );

    let effects = site.handle(SiteEvent::Elapsed(SKILL_FILL_DELAY));
    assert_eq!(
        effects,
        [SiteEffect::SetSkillWidth {
            index: 1,
            width: "30%".into()
        }]
    );
    assert!(
        site.handle(SiteEvent::Elapsed(Duration::from_secs(5)))
            .is_empty()
    );
}

#[test]
fn load_highlights_initial_link() {
    let mut site = site();
    site.handle(SiteEvent::Loaded);
    assert!(site.scroll_spy().is_active_link("#home"));
}

#[test]
fn theme_picker_selection_updates_backdrop() {
    let mut site = site();
    site.handle(SiteEvent::ThemeButtonClicked);
    assert!(site.theme().is_picker_open());

    site.handle(SiteEvent::ThemeOptionClicked("dark".into()));
    assert!(!site.theme().is_picker_open());
    scroll(&mut site, 60.0);
    assert_eq!(
        site.navbar_background().to_string(),
        "rgba(31, 41, 55, 0.98)"
    );
}
