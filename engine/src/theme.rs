//! Theme selection and persistence across visits.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_types::{NavbarBackground, Theme, ThemePicker};
use folio_utils::{
    AtomicWriteOptions, FileSyncPolicy, ParentDirSyncPolicy, atomic_write_with_options,
    recover_bak_file,
};

/// Scroll offset past which the navbar backdrop turns more opaque.
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;

/// On-disk store holding the selected theme name.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Fsync the file, then its directory where the platform allows it.
    pub const WRITE_OPTIONS: AtomicWriteOptions = AtomicWriteOptions {
        file_sync: FileSyncPolicy::SyncAll,
        parent_dir_sync: ParentDirSyncPolicy::SyncBestEffort,
    };

    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/folio/theme`, falling back to `.folio/theme` when the
    /// platform has no data directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("folio"))
            .unwrap_or_else(|| PathBuf::from(".folio"))
            .join("theme")
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored theme, or `None` when nothing usable is stored.
    #[must_use]
    pub fn load(&self) -> Option<Theme> {
        recover_bak_file(&self.path);
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => Some(Theme::parse(&raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Failed to read stored theme"
                );
                None
            }
        }
    }

    pub fn save(&self, theme: &Theme) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        atomic_write_with_options(&self.path, theme.as_str().as_bytes(), Self::WRITE_OPTIONS)
    }
}

/// Current theme plus the picker dropdown.
#[derive(Debug, Clone)]
pub struct ThemeController {
    current: Theme,
    picker: ThemePicker,
    store: Option<ThemeStore>,
}

impl ThemeController {
    /// Restore the stored theme, or apply `fallback` when none is stored.
    #[must_use]
    pub fn init(store: Option<ThemeStore>, fallback: Theme) -> Self {
        let current = store
            .as_ref()
            .and_then(ThemeStore::load)
            .unwrap_or(fallback);
        tracing::debug!(theme = %current, "Theme applied");
        Self {
            current,
            picker: ThemePicker::default(),
            store,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Theme {
        &self.current
    }

    #[must_use]
    pub fn is_picker_open(&self) -> bool {
        self.picker.is_open()
    }

    pub fn toggle_picker(&mut self) {
        self.picker.toggle();
    }

    pub fn close_picker(&mut self) {
        self.picker.close();
    }

    /// Apply and persist a theme option. A failed write keeps the new theme
    /// for this session.
    pub fn select(&mut self, option: &str) -> &Theme {
        self.current = self.picker.select(option);
        if let Some(store) = &self.store
            && let Err(err) = store.save(&self.current)
        {
            tracing::warn!(
                path = %store.path().display(),
                error = %err,
                "Failed to persist theme"
            );
        }
        &self.current
    }

    #[must_use]
    pub fn is_option_highlighted(&self, option: &str) -> bool {
        ThemePicker::is_highlighted(option, &self.current)
    }

    #[must_use]
    pub fn navbar_background(&self, scroll_y: f64) -> NavbarBackground {
        self.current
            .navbar_background(scroll_y > NAVBAR_SCROLLED_AFTER)
    }
}
