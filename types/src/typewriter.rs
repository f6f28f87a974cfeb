//! Typewriter word-cycle state machine.
//!
//! ```text
//!         full word reached           empty text reached
//! Typing ──────────────────► Deleting ──────────────────► Typing (index+1)
//! ```
//!
//! This is the timing-free core: every [`TypewriterState::step`] performs one
//! character step and returns how long the caller should wait before the next.
//! Scheduling, pausing and rendering live in `folio-engine`.

use std::time::Duration;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::WordList;

pub const DEFAULT_WAIT: Duration = Duration::from_millis(3000);
pub const DEFAULT_SPEED: Duration = Duration::from_millis(100);
pub const DEFAULT_DELETE_SPEED: Duration = Duration::from_millis(50);

/// Delay between finishing a deletion and typing the next word.
pub const INTER_WORD_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypewriterPhase {
    #[default]
    Typing,
    Deleting,
}

impl TypewriterPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::Deleting => "deleting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterSettings {
    /// Pause once a word is fully typed.
    pub wait: Duration,
    /// Per-character typing delay.
    pub speed: Duration,
    /// Per-character deletion delay.
    pub delete_speed: Duration,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            wait: DEFAULT_WAIT,
            speed: DEFAULT_SPEED,
            delete_speed: DEFAULT_DELETE_SPEED,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("wait attribute {0:?} is not a whole number of milliseconds")]
pub struct WaitAttributeError(pub String);

/// Parse a `data-wait` style attribute (milliseconds).
pub fn parse_wait_attribute(raw: &str) -> Result<Duration, WaitAttributeError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| WaitAttributeError(raw.to_string()))
}

/// Position within the word cycle.
///
/// Invariant: `shown` never exceeds the grapheme count of the current word, so
/// [`TypewriterState::text`] is always a prefix of [`TypewriterState::current_word`].
#[derive(Debug, Clone)]
pub struct TypewriterState {
    words: WordList,
    index: usize,
    shown: usize,
    phase: TypewriterPhase,
}

impl TypewriterState {
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            index: 0,
            shown: 0,
            phase: TypewriterPhase::Typing,
        }
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn word_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    #[must_use]
    pub fn current_word(&self) -> &str {
        self.words.word(self.index)
    }

    /// Currently rendered prefix of the current word.
    #[must_use]
    pub fn text(&self) -> &str {
        let word = self.current_word();
        match word.grapheme_indices(true).nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// Perform one character step and return the delay before the next one.
    pub fn step(&mut self, settings: &TypewriterSettings) -> Duration {
        let total = self.current_word().graphemes(true).count();

        match self.phase {
            TypewriterPhase::Typing => {
                self.shown = (self.shown + 1).min(total);
                if self.shown == total {
                    self.phase = TypewriterPhase::Deleting;
                    settings.wait
                } else {
                    settings.speed
                }
            }
            TypewriterPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = TypewriterPhase::Typing;
                    self.index = self.words.next_index(self.index);
                    INTER_WORD_DELAY
                } else {
                    settings.delete_speed
                }
            }
        }
    }
}
