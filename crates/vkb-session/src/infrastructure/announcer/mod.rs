//! Announcers: where accessibility announcements go.

use tracing::info;

use crate::application::host::Announcer;
use crate::application::open_config::Politeness;

pub mod mock;

/// Writes announcements to the log. Used by headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnnouncer;

impl Announcer for TracingAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        info!(?politeness, "announce: {message}");
    }
}
