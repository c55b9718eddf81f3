//! Domain entities for the virtual keyboard.
//!
//! This module contains pure logic with no host dependencies: no rendering,
//! no event loop, no I/O. Everything here can be tested in isolation.
//!
//! - **`key`** – glyphs, class keys and the 4-variant key definition.
//! - **`modifier`** – the Shift/Alt/CapsLock state machine that selects which
//!   variant of a key is visible.
//! - **`icons`** – icons drawn on class keys.
//! - **`layout`** – a named grid of keys.

pub mod icons;
pub mod key;
pub mod layout;
pub mod modifier;
