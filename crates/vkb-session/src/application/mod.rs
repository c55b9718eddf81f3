//! Application layer: keyboard sessions and the controller that opens them.
//!
//! Everything here depends only on `vkb_core` and on the host capability
//! traits in [`host`]. Concrete hosts live in the infrastructure layer.

pub mod controller;
pub mod host;
pub mod open_config;
pub mod session;
pub mod signal;
