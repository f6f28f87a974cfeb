//! Page-load preloader.

use std::time::Duration;

use super::animation::EffectTimer;

/// The preloader is removed from layout this long after it starts fading.
pub const PRELOADER_HIDE_AFTER: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderStage {
    Visible,
    /// `opacity-0` applied; still occupying layout.
    Fading,
    /// `display: none`.
    Hidden,
}

#[derive(Debug, Clone, Default)]
pub struct Preloader {
    fade: Option<EffectTimer>,
    hidden: bool,
}

impl Preloader {
    /// Window `load`: start fading out.
    pub fn on_load(&mut self) {
        if self.fade.is_none() && !self.hidden {
            self.fade = Some(EffectTimer::new(PRELOADER_HIDE_AFTER));
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(fade) = &mut self.fade {
            fade.advance(delta);
            if fade.is_finished() {
                self.fade = None;
                self.hidden = true;
            }
        }
    }

    #[must_use]
    pub fn stage(&self) -> PreloaderStage {
        match (&self.fade, self.hidden) {
            (_, true) => PreloaderStage::Hidden,
            (Some(_), false) => PreloaderStage::Fading,
            (None, false) => PreloaderStage::Visible,
        }
    }
}
