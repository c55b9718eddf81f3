//! Infrastructure layer for the keyboard session.
//!
//! Contains host adapters: overlay hosts, announcers, the in-memory text
//! buffer, and file-system configuration storage.
//!
//! **Dependency rule**: this layer may depend on `application` and `vkb_core`,
//! but MUST NOT be imported by the `application` or domain layers outside of
//! tests.

pub mod announcer;
pub mod overlay;
pub mod storage;
pub mod text_input;
