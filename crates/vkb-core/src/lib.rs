//! # vkb-core
//!
//! Shared library for the virtual keyboard containing the glyph model, the
//! modifier state machine, and the layout registry with its built-in tables.
//!
//! It has zero dependencies on rendering, event loops, or host UI toolkits.
//!
//! - **`domain`** – Pure keyboard logic. The most important piece is the
//!   modifier state machine: given a key's four glyph variants and the
//!   current Shift/Alt/CapsLock state, decide which glyph is visible and
//!   which modifier keys are highlighted.
//!
//! - **`layouts`** – Built-in layout tables and the [`LayoutRegistry`] that
//!   resolves a locale tag such as `"de-AT"` to a layout.

pub mod domain;
pub mod layouts;

// Re-export the most-used types at the crate root so callers can write
// `vkb_core::Layout` instead of `vkb_core::domain::layout::Layout`.
pub use domain::icons::{IconSet, KeyIcon};
pub use domain::key::{Glyph, KeyClass, KeyDefinition, KeyPosition};
pub use domain::layout::{Layout, LayoutError};
pub use domain::modifier::{KeyState, KeyboardModifier};
pub use layouts::LayoutRegistry;
