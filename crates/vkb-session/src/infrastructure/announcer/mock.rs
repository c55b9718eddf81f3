//! Recording announcer for unit testing.

use std::cell::RefCell;

use crate::application::host::Announcer;
use crate::application::open_config::Politeness;

/// An [`Announcer`] that remembers every announcement in order.
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    messages: RefCell<Vec<(String, Politeness)>>,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the announcements made so far.
    pub fn messages(&self) -> Vec<(String, Politeness)> {
        self.messages.borrow().clone()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        self.messages
            .borrow_mut()
            .push((message.to_string(), politeness));
    }
}
