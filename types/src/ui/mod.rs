//! UI state types for the page layer.
//!
//! Pure data types with no IO, no async, no DOM dependency.
//! A host (browser glue, terminal demo, tests) feeds events in and reads the
//! resulting state back out.

mod animation;
mod filter;
mod form;
mod menu;
mod notification;
mod page;
mod reveal;
mod scroll;
mod sections;
mod skills;

pub use animation::EffectTimer;
pub use filter::{FILTER_ALL, ItemVisibility, PortfolioFilter};
pub use form::{ContactForm, FieldState, SubmitButton};
pub use menu::{BodyScroll, MOBILE_BREAKPOINT, MobileMenu};
pub use notification::{
    AUTO_DISMISS_AFTER, Notification, NotificationCenter, NotificationKind, SLIDE_OUT,
};
pub use page::{PRELOADER_HIDE_AFTER, Preloader, PreloaderStage};
pub use reveal::{REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD, RevealTarget, SKILL_FILL_DELAY};
pub use scroll::{
    HEADER_OFFSET, NavbarScroll, SCROLL_SPY_OFFSET, ScrollSpy, SectionBounds,
    smooth_scroll_target,
};
pub use sections::{ASIDE_BREAKPOINT, SectionSwitcher};
pub use skills::{Rect, SkillBar, Viewport};
