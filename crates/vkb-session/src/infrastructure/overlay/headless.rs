//! Overlay host without a display.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use crate::application::controller::KeyboardController;
use crate::application::host::{OverlayError, OverlayHost, Placement};
use crate::application::session::SessionId;

/// Tracks mounted panels and pending auto-dismiss timers in memory.
///
/// Time does not pass on its own: [`HeadlessOverlay::fire_timers`] fires
/// every pending timer at once.
#[derive(Debug, Default)]
pub struct HeadlessOverlay {
    mounted: RefCell<BTreeSet<SessionId>>,
    timers: RefCell<Vec<(SessionId, Duration)>>,
}

impl HeadlessOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self, session: SessionId) -> bool {
        self.mounted.borrow().contains(&session)
    }

    pub fn pending_timers(&self) -> Vec<(SessionId, Duration)> {
        self.timers.borrow().clone()
    }

    /// Fires all pending auto-dismiss timers against `controller`.
    ///
    /// Returns how many sessions were actually dismissed; timers of sessions
    /// that are no longer open are dropped.
    pub fn fire_timers(&self, controller: &Rc<KeyboardController>) -> usize {
        let due: Vec<_> = self.timers.borrow_mut().drain(..).collect();
        let mut dismissed = 0;
        for (session, after) in due {
            debug!(%session, ?after, "auto-dismiss timer fired");
            if controller.dismiss_session(session) {
                dismissed += 1;
            }
        }
        dismissed
    }
}

impl OverlayHost for HeadlessOverlay {
    fn attach(&self, session: SessionId, placement: Placement) -> Result<(), OverlayError> {
        if !self.mounted.borrow_mut().insert(session) {
            return Err(OverlayError::Unavailable(format!(
                "panel of session {session} is already mounted"
            )));
        }
        info!(%session, ?placement, "panel attached");
        Ok(())
    }

    fn detach(&self, session: SessionId) {
        self.mounted.borrow_mut().remove(&session);
        self.timers.borrow_mut().retain(|(id, _)| *id != session);
        info!(%session, "panel detached");
    }

    fn schedule_auto_dismiss(&self, session: SessionId, after: Duration) {
        debug!(%session, ?after, "auto-dismiss scheduled");
        self.timers.borrow_mut().push((session, after));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::open_config::OpenConfig;
    use crate::application::session::Transition;
    use crate::infrastructure::announcer::TracingAnnouncer;
    use vkb_core::LayoutRegistry;

    #[test]
    fn test_attach_and_detach_track_mounted_panels() {
        let overlay = HeadlessOverlay::new();
        let id = SessionId::new();

        overlay.attach(id, Placement::default()).unwrap();
        assert!(overlay.is_mounted(id));
        assert!(overlay.attach(id, Placement::default()).is_err());

        overlay.detach(id);
        assert!(!overlay.is_mounted(id));
    }

    #[test]
    fn test_fire_timers_dismisses_open_session() {
        // Arrange
        let overlay = Rc::new(HeadlessOverlay::new());
        let controller = KeyboardController::new(
            Rc::new(LayoutRegistry::builtin()),
            overlay.clone(),
            Rc::new(TracingAnnouncer),
        );
        let config = OpenConfig {
            duration_ms: 250,
            ..OpenConfig::default()
        };
        let session = controller.open(Some("en"), config).unwrap();
        controller.transition_complete(session.id(), Transition::Enter);
        assert_eq!(overlay.pending_timers().len(), 1);

        // Act
        let fired = overlay.fire_timers(&controller);
        controller.transition_complete(session.id(), Transition::Exit);

        // Assert
        assert_eq!(fired, 1);
        assert!(!controller.is_open());
        assert!(!overlay.is_mounted(session.id()));
        assert!(overlay.pending_timers().is_empty());
    }
}
