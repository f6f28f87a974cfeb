//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod outcome;
mod theme;
mod typewriter;
mod words;

pub mod ui;

pub use outcome::ParseOutcome;
pub use theme::{NavbarBackground, Theme, ThemePicker};
pub use typewriter::{
    DEFAULT_DELETE_SPEED, DEFAULT_SPEED, DEFAULT_WAIT, INTER_WORD_DELAY, TypewriterPhase,
    TypewriterSettings, TypewriterState, WaitAttributeError, parse_wait_attribute,
};
pub use words::{DEFAULT_WORD, WordList, WordListError};
