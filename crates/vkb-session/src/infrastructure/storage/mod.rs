//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration from the
//! platform-appropriate directory, writes it back, and turns it into a
//! [`vkb_core::LayoutRegistry`].

pub mod config;
