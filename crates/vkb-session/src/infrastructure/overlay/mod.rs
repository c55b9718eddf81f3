//! Overlay hosts: surfaces the keyboard panel is mounted on.
//!
//! A graphical host would mount the panel in a popup layer and play the
//! entrance and exit animations. The hosts here have no screen: the
//! [`headless::HeadlessOverlay`] logs what it would do and queues scheduled
//! auto-dismissals for the caller to fire, and the recording mock lets tests
//! assert on the exact call sequence.

pub mod headless;
pub mod mock;
