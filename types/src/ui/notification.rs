//! Toast notification shown after a form submission.

use std::time::Duration;

use super::animation::EffectTimer;

/// A toast dismisses itself after this long.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);
/// Length of the slide-out animation before the toast is removed.
pub const SLIDE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone)]
enum Stage {
    Shown(EffectTimer),
    Leaving(EffectTimer),
}

#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    kind: NotificationKind,
    stage: Stage,
}

impl Notification {
    fn new(message: String, kind: NotificationKind) -> Self {
        Self {
            message,
            kind,
            stage: Stage::Shown(EffectTimer::new(AUTO_DISMISS_AFTER)),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// CSS classes of the toast element.
    #[must_use]
    pub fn class(&self) -> String {
        format!("notification {}", self.kind.as_str())
    }

    /// Whether the slide-out animation is playing.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.stage, Stage::Leaving(_))
    }

    fn leave(&mut self) {
        if let Stage::Shown(_) = self.stage {
            self.stage = Stage::Leaving(EffectTimer::new(SLIDE_OUT));
        }
    }

    /// Advance timers; returns `true` once the toast should be removed.
    fn advance(&mut self, delta: Duration) -> bool {
        match &mut self.stage {
            Stage::Shown(timer) => {
                timer.advance(delta);
                if !timer.is_finished() {
                    return false;
                }
                let carry = timer.overshoot();
                self.leave();
                self.advance(carry)
            }
            Stage::Leaving(timer) => {
                timer.advance(delta);
                timer.is_finished()
            }
        }
    }
}

/// Holds at most one toast; a new one replaces whatever is on screen.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.current = Some(Notification::new(message.into(), kind));
    }

    /// Close button: start the slide-out.
    pub fn dismiss(&mut self) {
        if let Some(notification) = &mut self.current {
            notification.leave();
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        let remove = self
            .current
            .as_mut()
            .is_some_and(|notification| notification.advance(delta));
        if remove {
            self.current = None;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
