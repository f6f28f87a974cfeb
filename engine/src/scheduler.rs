//! Deferred-callback timers.
//!
//! The typewriter never sleeps itself; it asks a [`Scheduler`] for a timer and
//! is handed the [`TimerId`] back when the timer expires. Two implementations:
//!
//! - [`ManualScheduler`]: logical clock advanced explicitly, for deterministic tests
//!   and headless hosts.
//! - [`TokioScheduler`]: real timers, delivered over an mpsc channel.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handle for one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Schedule-after-delay / cancel-pending capability.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Logical-time scheduler.
///
/// Timers are ordered by deadline, ties broken by creation order, so runs are
/// reproducible.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: BTreeSet<(Duration, TimerId)>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.first().map(|(deadline, _)| *deadline)
    }

    /// Remove the earliest timer due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let &(deadline, id) = self.pending.first()?;
        if deadline > until {
            return None;
        }
        self.pending.pop_first();
        self.now = self.now.max(deadline);
        Some(id)
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    pub fn advance_clock_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((self.now.saturating_add(delay), id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, pending)| *pending != id);
    }
}

/// Scheduler backed by tokio timers.
///
/// Each timer is a spawned task that sleeps and then sends its id on the
/// channel returned by [`TokioScheduler::new`]. Must be used from within a
/// tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    tx: mpsc::UnboundedSender<TimerId>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            next_id: 0,
            tasks: HashMap::new(),
            tx,
        };
        (scheduler, rx)
    }

    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.tasks
            .values()
            .filter(|task| !task.is_finished())
            .count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());

        let id = TimerId(self.next_id);
        self.next_id += 1;

        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host shut down; nothing left to notify.
            let _ = tx.send(id);
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}
