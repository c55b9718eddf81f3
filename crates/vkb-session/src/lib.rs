//! # vkb-session
//!
//! Session layer of the virtual keyboard: opens a keyboard for a locale or
//! layout name, tracks its modifier state, mirrors physical key presses, and
//! types into a bound text field.
//!
//! - **`application`** – [`KeyboardController`], [`KeyboardSession`], and the
//!   host capability traits they consume.
//! - **`infrastructure`** – headless and recording hosts, the in-memory text
//!   buffer, and TOML configuration.

pub mod application;
pub mod infrastructure;

pub use application::controller::KeyboardController;
pub use application::host::{Announcer, InputTarget, OverlayError, OverlayHost, Placement};
pub use application::open_config::{OpenConfig, Politeness};
pub use application::session::{
    KeyView, KeyboardSession, PhysicalKeyEvent, SessionError, SessionHandle, SessionId,
    SessionPhase, Transition,
};
pub use application::signal::{Signal, Subscription};
