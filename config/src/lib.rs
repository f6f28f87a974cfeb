//! Site configuration for Folio.
//!
//! Loaded from `~/.folio/config.toml`. Every section and field is optional;
//! missing values fall back to the same defaults the page script uses.
//!
//! ```toml
//! [typewriter]
//! words = ["Web Developer", "Rust Developer"]
//! wait_ms = 3000
//! speed_ms = 100
//! delete_speed_ms = 50
//!
//! [contact]
//! endpoint = "https://api.web3forms.com/submit"
//! access_key = "${WEB3FORMS_ACCESS_KEY}"
//! timeout_seconds = 30
//!
//! [theme]
//! default = "dark"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use folio_types::{Theme, TypewriterSettings, WordList};

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";
const DEFAULT_CONTACT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Default, Deserialize)]
pub struct SiteConfig {
    pub typewriter: Option<TypewriterConfig>,
    pub contact: Option<ContactConfig>,
    pub theme: Option<ThemeConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Typewriter defaults for hosts that do not carry their own metadata.
#[derive(Debug, Default, Deserialize)]
pub struct TypewriterConfig {
    #[serde(default)]
    pub words: Vec<String>,
    pub wait_ms: Option<u64>,
    pub speed_ms: Option<u64>,
    pub delete_speed_ms: Option<u64>,
}

impl TypewriterConfig {
    /// Resolve timing, keeping the built-in default for anything unset.
    #[must_use]
    pub fn settings(&self) -> TypewriterSettings {
        let defaults = TypewriterSettings::default();
        TypewriterSettings {
            wait: self.wait_ms.map_or(defaults.wait, Duration::from_millis),
            speed: self.speed_ms.map_or(defaults.speed, Duration::from_millis),
            delete_speed: self
                .delete_speed_ms
                .map_or(defaults.delete_speed, Duration::from_millis),
        }
    }

    /// Configured words, or `None` when the list is empty.
    #[must_use]
    pub fn word_list(&self) -> Option<WordList> {
        WordList::new(self.words.clone()).ok()
    }
}

/// Contact-form relay settings.
#[derive(Default, Deserialize)]
pub struct ContactConfig {
    pub endpoint: Option<String>,
    /// Relay access key. Supports `${VAR}` expansion.
    pub access_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

// Manual Debug impl to prevent leaking the access key in logs.
impl std::fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactConfig")
            .field("endpoint", &self.endpoint)
            .field(
                "access_key",
                &if self.access_key.is_some() {
                    "[REDACTED]"
                } else {
                    "None"
                },
            )
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ContactConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or(DEFAULT_CONTACT_ENDPOINT)
    }

    /// Access key after `${VAR}` expansion; `None` if unset or blank.
    #[must_use]
    pub fn access_key(&self) -> Option<String> {
        self.access_key
            .as_deref()
            .map(expand_env_vars)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout_seconds
            .map_or(DEFAULT_CONTACT_TIMEOUT, Duration::from_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeConfig {
    /// Theme used when no preference has been saved yet.
    pub default: Option<String>,
}

impl ThemeConfig {
    #[must_use]
    pub fn default_theme(&self) -> Theme {
        self.default
            .as_deref()
            .map(Theme::parse)
            .unwrap_or_default()
    }
}

/// Replace `${VAR}` references with environment values; unset variables expand to "".
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(end_rel) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &rest[start + 2..start + 2 + end_rel];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &rest[start + 2 + end_rel + 1..];
    }

    out.push_str(rest);
    out
}

impl SiteConfig {
    /// Load from the default location. `Ok(None)` when no config file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), "Failed to read config: {source}");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map(Some).map_err(|source| {
            tracing::warn!(path = %path.display(), "Failed to parse config: {source}");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
