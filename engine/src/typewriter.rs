//! Typewriter engine: the word-cycle state machine wired to a render target,
//! a scheduler and a visibility signal.
//!
//! # Lifecycle
//!
//! ```text
//! start() ─► tick ─► schedule(delay) ─► fire(id) ─► tick ─► ...
//!              ▲                                      │
//!   resume() ──┘            pause() cancels the pending timer
//! ```
//!
//! At most one timer is pending at any instant: every tick cancels the
//! outstanding timer before scheduling the next, and [`Typewriter::fire`]
//! ignores ids that are no longer the pending one.

use std::time::Duration;

use thiserror::Error;

use folio_types::{
    TypewriterPhase, TypewriterSettings, TypewriterState, WordList, WordListError,
    parse_wait_attribute,
};

use crate::scheduler::{ManualScheduler, Scheduler, TimerId};

/// Display surface the typewriter writes into.
pub trait RenderTarget {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);

    /// Whether the surface still exists. A detached target stops the cycle.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Render target that remembers every render, for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    renders: Vec<String>,
    detached: bool,
}

impl RecordingTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn renders(&self) -> &[String] {
        &self.renders
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.renders.last().map(String::as_str)
    }

    /// Simulate the element being removed from the page.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

impl RenderTarget for RecordingTarget {
    fn set_text(&mut self, text: &str) {
        self.renders.push(text.to_string());
    }

    fn is_attached(&self) -> bool {
        !self.detached
    }
}

/// Raw metadata attached to the render target, read once at construction.
#[derive(Debug, Clone, Default)]
pub struct TargetMetadata {
    /// JSON-encoded array of strings (`data-words`).
    pub words: Option<String>,
    /// Milliseconds to hold a finished word (`data-wait`).
    pub wait: Option<String>,
}

/// Fully resolved typewriter configuration.
#[derive(Debug, Clone, Default)]
pub struct TypewriterConfig {
    pub words: WordList,
    pub settings: TypewriterSettings,
}

impl TypewriterConfig {
    #[must_use]
    pub fn new(words: WordList, settings: TypewriterSettings) -> Self {
        Self { words, settings }
    }

    /// Resolve target metadata on top of `defaults`.
    ///
    /// Bad metadata never fails construction: a malformed or empty word list
    /// becomes the default list and an unparsable wait keeps `defaults.wait`.
    #[must_use]
    pub fn from_metadata(metadata: &TargetMetadata, defaults: TypewriterSettings) -> Self {
        let (words, reason) = WordList::from_attribute(metadata.words.as_deref()).into_parts();
        match reason {
            None => {}
            Some(WordListError::Empty) if metadata.words.is_none() => {
                tracing::debug!("Typewriter has no word list; using default");
            }
            Some(err) => {
                tracing::warn!(error = %err, "Typewriter: invalid word list; using default");
            }
        }

        let wait = match metadata.wait.as_deref().map(parse_wait_attribute) {
            Some(Ok(wait)) => wait,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Typewriter: invalid wait; using default");
                defaults.wait
            }
            None => defaults.wait,
        };

        Self {
            words,
            settings: TypewriterSettings { wait, ..defaults },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("typewriter: no render target provided")]
    MissingTarget,
}

/// Whether the render target is inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub const fn from_intersecting(intersecting: bool) -> Self {
        if intersecting {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

/// Typewriter engine.
///
/// The engine is the only writer of its state and owns its single pending
/// timer handle. The host delivers expired timers through [`Typewriter::fire`].
#[derive(Debug)]
pub struct Typewriter<R, S> {
    target: R,
    scheduler: S,
    state: TypewriterState,
    settings: TypewriterSettings,
    paused: bool,
    pending: Option<TimerId>,
}

impl<R: RenderTarget, S: Scheduler> Typewriter<R, S> {
    /// Build the engine and perform the first tick.
    ///
    /// Without a render target nothing is constructed and no timer is scheduled.
    pub fn start(
        target: Option<R>,
        scheduler: S,
        config: TypewriterConfig,
    ) -> Result<Self, TypewriterError> {
        let Some(target) = target else {
            tracing::error!("Typewriter: no element provided");
            return Err(TypewriterError::MissingTarget);
        };

        tracing::debug!(
            words = config.words.count(),
            wait_ms = config.settings.wait.as_millis() as u64,
            "Typewriter starting"
        );

        let mut engine = Self {
            target,
            scheduler,
            state: TypewriterState::new(config.words),
            settings: config.settings,
            paused: false,
            pending: None,
        };
        engine.tick();
        Ok(engine)
    }

    fn tick(&mut self) {
        if self.paused || !self.target.is_attached() {
            return;
        }

        let before = self.state.phase();
        let delay = self.state.step(&self.settings);
        self.target.set_text(self.state.text());

        if before != self.state.phase() {
            tracing::trace!(
                phase = self.state.phase().as_str(),
                word_index = self.state.word_index(),
                "Typewriter phase change"
            );
        }

        self.cancel_pending();
        self.pending = Some(self.scheduler.schedule(delay));
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Deliver an expired timer. Returns `false` (and does nothing) when `id`
    /// is not the pending timer, e.g. one cancelled while already in flight.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            tracing::trace!(timer = id.as_u64(), "Ignoring stale typewriter timer");
            return false;
        }
        self.pending = None;
        self.tick();
        true
    }

    /// Freeze the cycle. Idempotent.
    pub fn pause(&mut self) {
        self.paused = true;
        self.cancel_pending();
    }

    /// Unfreeze and step immediately. Any pending timer is replaced, so the
    /// character sequence never skips or repeats a step.
    pub fn resume(&mut self) {
        self.paused = false;
        self.tick();
    }

    /// Inbound hook for viewport observers.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Visible => self.resume(),
            Visibility::Hidden => self.pause(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.state.text()
    }

    #[must_use]
    pub fn phase(&self) -> TypewriterPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn word_index(&self) -> usize {
        self.state.word_index()
    }

    #[must_use]
    pub fn current_word(&self) -> &str {
        self.state.current_word()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    #[must_use]
    pub fn settings(&self) -> &TypewriterSettings {
        &self.settings
    }

    #[must_use]
    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<R: RenderTarget> Typewriter<R, ManualScheduler> {
    /// Advance logical time by `by`, firing every timer that comes due.
    /// Returns the number of ticks performed.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.scheduler.now().saturating_add(by);
        let mut fired = 0;
        while let Some(id) = self.scheduler.pop_due(until) {
            if self.fire(id) {
                fired += 1;
            }
        }
        self.scheduler.advance_clock_to(until);
        fired
    }

    /// Fire the next `steps` timers regardless of their delay.
    /// Stops early when nothing is pending (paused or detached).
    pub fn run_steps(&mut self, steps: usize) -> usize {
        let mut fired = 0;
        for _ in 0..steps {
            let Some(deadline) = self.scheduler.next_deadline() else {
                break;
            };
            if let Some(id) = self.scheduler.pop_due(deadline)
                && self.fire(id)
            {
                fired += 1;
            }
        }
        fired
    }
}
