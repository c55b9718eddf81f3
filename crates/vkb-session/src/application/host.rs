//! Capabilities the keyboard consumes from its host.
//!
//! The session and controller depend only on these traits. Infrastructure
//! implementations (a headless overlay, a tracing announcer, an in-memory text
//! buffer) and the recording mocks used by tests are injected at construction
//! time.

use std::time::Duration;

use thiserror::Error;

use super::open_config::Politeness;
use super::session::SessionId;

/// Error raised by an [`OverlayHost`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OverlayError {
    #[error("overlay unavailable: {0}")]
    Unavailable(String),
}

/// Horizontal anchor of the keyboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Center,
}

/// Vertical anchor of the keyboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Bottom,
}

/// Where the overlay places the keyboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
    pub full_width: bool,
}

impl Default for Placement {
    /// Bottom-center, spanning the full width of the viewport.
    fn default() -> Self {
        Self {
            horizontal: HorizontalAnchor::Center,
            vertical: VerticalAnchor::Bottom,
            full_width: true,
        }
    }
}

/// Screen-reader live region.
pub trait Announcer {
    fn announce(&self, message: &str, politeness: Politeness);
}

/// The surface the keyboard panel is attached to.
///
/// The host reports the end of each entrance or exit animation back through
/// `KeyboardController::transition_complete` with the matching `Transition`.
/// It fires scheduled auto-dismissals through
/// `KeyboardController::dismiss_session`.
pub trait OverlayHost {
    /// Mounts the panel of `session`.
    fn attach(&self, session: SessionId, placement: Placement) -> Result<(), OverlayError>;

    /// Unmounts the panel of `session`.
    fn detach(&self, session: SessionId);

    /// Asks the host to dismiss `session` once `after` has elapsed.
    fn schedule_auto_dismiss(&self, session: SessionId, after: Duration);
}

/// The text field the keyboard types into.
pub trait InputTarget {
    /// Replaces the selection (or inserts at the caret) with `text`.
    fn insert_text(&mut self, text: &str);

    /// Deletes the selection, or the character before the caret.
    fn delete_backward(&mut self);

    /// `true` for multi-line fields, where Enter inserts a newline.
    fn is_multiline(&self) -> bool;
}
