//! Recording overlay host for unit testing.

use std::cell::RefCell;
use std::time::Duration;

use crate::application::host::{OverlayError, OverlayHost, Placement};
use crate::application::session::SessionId;

/// One call received by [`RecordingOverlay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayCall {
    Attach(SessionId, Placement),
    Detach(SessionId),
    ScheduleAutoDismiss(SessionId, Duration),
}

/// An [`OverlayHost`] that records every call and can be told to refuse
/// attachments.
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    calls: RefCell<Vec<OverlayCall>>,
    attach_failure: RefCell<Option<String>>,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `attach` fail with `reason`.
    pub fn fail_attach(&self, reason: impl Into<String>) {
        *self.attach_failure.borrow_mut() = Some(reason.into());
    }

    /// Returns the successful calls received so far, in order.
    pub fn calls(&self) -> Vec<OverlayCall> {
        self.calls.borrow().clone()
    }
}

impl OverlayHost for RecordingOverlay {
    fn attach(&self, session: SessionId, placement: Placement) -> Result<(), OverlayError> {
        if let Some(reason) = self.attach_failure.borrow().clone() {
            return Err(OverlayError::Unavailable(reason));
        }
        self.calls
            .borrow_mut()
            .push(OverlayCall::Attach(session, placement));
        Ok(())
    }

    fn detach(&self, session: SessionId) {
        self.calls.borrow_mut().push(OverlayCall::Detach(session));
    }

    fn schedule_auto_dismiss(&self, session: SessionId, after: Duration) {
        self.calls
            .borrow_mut()
            .push(OverlayCall::ScheduleAutoDismiss(session, after));
    }
}
