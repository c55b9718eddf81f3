//! Options applied when a keyboard session is opened.
//!
//! The same struct is used for the `[open]` table of the configuration file,
//! so every field has a serde default and an empty table is a valid config.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vkb_core::{KeyClass, KeyIcon};

/// How urgently the announcement is read out by assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[default]
    Assertive,
    Polite,
}

/// Per-session options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenConfig {
    pub politeness: Politeness,
    /// Announced once the keyboard is visible. Empty means no announcement.
    pub announcement_message: String,
    /// Auto-dismiss delay in milliseconds; `0` keeps the keyboard open.
    pub duration_ms: u64,
    /// `None` leaves the theme to the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_theme: Option<bool>,
    /// Logs every physical and virtual key event of the session.
    pub is_debug: bool,
    /// Icons replacing the stock icon of a class key.
    pub custom_icons: BTreeMap<KeyClass, KeyIcon>,
}

impl OpenConfig {
    /// Auto-dismiss delay, if one is configured.
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (self.duration_ms > 0).then(|| Duration::from_millis(self.duration_ms))
    }
}
