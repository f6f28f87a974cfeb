//! Core engine for Folio: the typewriter and page-state orchestration.
//!
//! This crate contains no DOM or terminal dependencies. Hosts supply a
//! [`RenderTarget`], a [`Scheduler`] and document events; the engine owns
//! every state transition.

mod contact;
mod scheduler;
mod site;
mod theme;
mod typewriter;

pub use contact::{FAILURE_MESSAGE, SUCCESS_MESSAGE, submit_contact_form};
pub use scheduler::{ManualScheduler, Scheduler, TimerId, TokioScheduler};
pub use site::{PageLayout, SiteController, SiteEffect, SiteEvent, footer_year};
pub use theme::{NAVBAR_SCROLLED_AFTER, ThemeController, ThemeStore};
pub use typewriter::{
    RecordingTarget, RenderTarget, TargetMetadata, Typewriter, TypewriterConfig, TypewriterError,
    Visibility,
};

pub use folio_relay::{RelayClient, RelayError, RelayResponse};
pub use folio_types::{Theme, TypewriterPhase, TypewriterSettings, WordList};
