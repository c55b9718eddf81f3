//! TOML-based configuration for the keyboard.
//!
//! Reads and writes [`AppConfig`] at the platform-appropriate config file:
//! - Windows:  `%APPDATA%\Vkb\config.toml`
//! - Linux:    `$XDG_CONFIG_HOME/vkb/config.toml` (or `~/.config/vkb/config.toml`)
//! - macOS:    `~/Library/Application Support/Vkb/config.toml`
//!
//! ```toml
//! [keyboard]
//! default_locale = "de-DE"
//! log_level = "debug"
//!
//! [open]
//! announcement_message = "Keyboard opened"
//! duration_ms = 30000
//!
//! [[layouts]]
//! name = "Numpad"
//! lang = ["xx"]
//! keys = [
//!     [["7", "7", "7", "7"], ["8", "8", "8", "8"], ["9", "9", "9", "9"]],
//!     [["Bksp", "Bksp", "Bksp", "Bksp"], ["Enter", "Enter", "Enter", "Enter"]],
//! ]
//! ```
//!
//! Every section and field is optional: a missing file or an empty file both
//! yield [`AppConfig::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use vkb_core::{Layout, LayoutError, LayoutRegistry};

use crate::application::open_config::OpenConfig;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A custom layout is unusable.
    #[error("invalid custom layout: {0}")]
    InvalidLayout(#[from] LayoutError),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub keyboard: KeyboardSettings,
    /// Defaults for every opened keyboard.
    #[serde(default)]
    pub open: OpenConfig,
    /// Custom layouts registered after the built-ins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layouts: Vec<Layout>,
}

/// General keyboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardSettings {
    /// Locale used when a keyboard is opened without one.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_locale() -> String {
    LayoutRegistry::DEFAULT_LOCALE.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads [`AppConfig`] from the platform config file.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads [`AppConfig`] from `path`, returning the defaults if the file does
/// not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            debug!(path = %path.display(), layouts = cfg.layouts.len(), "config loaded");
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(AppConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to the platform config file.
///
/// # Errors
///
/// See [`save_config_to`].
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_file_path()?)
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "config saved");
    Ok(())
}

/// Builds the layout registry described by `config`: the built-in layouts,
/// then the custom ones (replacing built-ins of the same name), with the
/// configured default locale.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLayout`] for the first custom layout that
/// fails validation.
pub fn build_registry(config: &AppConfig) -> Result<LayoutRegistry, ConfigError> {
    let mut registry =
        LayoutRegistry::builtin().with_default_locale(config.keyboard.default_locale.clone());
    for layout in &config.layouts {
        registry.register(layout.clone())?;
    }
    Ok(registry)
}

/// Resolves the platform config base directory including the `Vkb` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Vkb"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("vkb"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Vkb")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
