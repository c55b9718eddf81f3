//! KeyboardController: opens and dismisses keyboard sessions.
//!
//! At most one session is open per controller tree. Opening while another
//! session is open dismisses it first, and the new session only starts its
//! entrance once the old one reported `after_dismissed`, so two keyboards are
//! never on screen at the same time.
//!
//! # Controller tree
//!
//! Child controllers hold a [`Weak`] reference to their parent and delegate
//! the "open session" pointer to the root, so a keyboard opened from any
//! level is visible to, and replaceable from, every other level.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, error, info};
use vkb_core::LayoutRegistry;

use super::host::{Announcer, OverlayHost};
use super::open_config::OpenConfig;
use super::session::{KeyboardSession, SessionError, SessionHandle, SessionId, Transition};

pub struct KeyboardController {
    registry: Rc<LayoutRegistry>,
    overlay: Rc<dyn OverlayHost>,
    announcer: Rc<dyn Announcer>,
    parent: Option<Weak<KeyboardController>>,
    /// Open session; only meaningful on the root controller.
    open_session: RefCell<Option<SessionHandle>>,
    /// Sessions not yet destroyed, including one queued behind an exit.
    live: RefCell<Vec<SessionHandle>>,
}

impl KeyboardController {
    /// Creates a root controller.
    pub fn new(
        registry: Rc<LayoutRegistry>,
        overlay: Rc<dyn OverlayHost>,
        announcer: Rc<dyn Announcer>,
    ) -> Rc<Self> {
        Rc::new(Self {
            registry,
            overlay,
            announcer,
            parent: None,
            open_session: RefCell::new(None),
            live: RefCell::new(Vec::new()),
        })
    }

    /// Creates a child controller sharing this controller's open session.
    pub fn child(self: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self {
            registry: Rc::clone(&self.registry),
            overlay: Rc::clone(&self.overlay),
            announcer: Rc::clone(&self.announcer),
            parent: Some(Rc::downgrade(self)),
            open_session: RefCell::new(None),
            live: RefCell::new(Vec::new()),
        })
    }

    /// Returns the root of the tree, or `self` if the parent chain is broken.
    fn root(self: &Rc<Self>) -> Rc<Self> {
        let mut current = Rc::clone(self);
        while let Some(parent) = current.parent.as_ref().and_then(Weak::upgrade) {
            current = parent;
        }
        current
    }

    /// The session currently open anywhere in this controller tree.
    pub fn active_session(self: &Rc<Self>) -> Option<SessionHandle> {
        let root = self.root();
        let session = root.open_session.borrow().clone();
        session
    }

    pub fn is_open(self: &Rc<Self>) -> bool {
        self.active_session().is_some()
    }

    fn set_active(self: &Rc<Self>, session: Option<SessionHandle>) {
        *self.root().open_session.borrow_mut() = session;
    }

    /// Opens a keyboard for a layout name or locale tag (`None` selects the
    /// registry's default locale).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] before touching any state when the
    /// layout cannot be resolved, and [`SessionError::Overlay`] when the
    /// overlay refuses the content of a session that could enter immediately.
    pub fn open(
        self: &Rc<Self>,
        layout_or_locale: Option<&str>,
        config: OpenConfig,
    ) -> Result<SessionHandle, SessionError> {
        let layout = self.registry.resolve(layout_or_locale)?.clone();
        let root = self.root();
        let session: SessionHandle = Rc::new(KeyboardSession::new(
            layout,
            config,
            Rc::clone(&self.overlay),
            Rc::clone(&self.announcer),
        ));
        info!(
            session = %session.id(),
            layout = %session.layout().name,
            requested = layout_or_locale.unwrap_or("<default>"),
            "opening keyboard"
        );

        root.live.borrow_mut().push(Rc::clone(&session));
        let weak_root = Rc::downgrade(&root);
        let id = session.id();
        session.after_dismissed().subscribe(move || {
            if let Some(root) = weak_root.upgrade() {
                root.forget(id);
            }
        });

        let previous = root.open_session.borrow().clone();
        match previous {
            Some(previous) => {
                let next = Rc::downgrade(&session);
                previous.after_dismissed().subscribe(move || {
                    if let Some(next) = next.upgrade() {
                        if let Err(e) = next.begin_enter() {
                            error!(session = %next.id(), "keyboard failed to enter: {e}");
                        }
                    }
                });
                *root.open_session.borrow_mut() = Some(Rc::clone(&session));
                debug!(previous = %previous.id(), next = %id, "waiting for previous keyboard");
                previous.dismiss();
            }
            None => {
                session.begin_enter()?;
                *root.open_session.borrow_mut() = Some(Rc::clone(&session));
            }
        }
        Ok(session)
    }

    /// Dismisses the open session, if any.
    pub fn dismiss(self: &Rc<Self>) {
        if let Some(session) = self.active_session() {
            session.dismiss();
        }
    }

    /// Dismisses `id` only if it is still the open session.
    ///
    /// Used by hosts to fire scheduled auto-dismissals.
    pub fn dismiss_session(self: &Rc<Self>, id: SessionId) -> bool {
        match self.active_session() {
            Some(session) if session.id() == id => {
                session.dismiss();
                true
            }
            _ => {
                debug!(session = %id, "stale dismiss ignored");
                false
            }
        }
    }

    /// Forwards the host's notice that `transition` of session `id` finished.
    pub fn transition_complete(self: &Rc<Self>, id: SessionId, transition: Transition) {
        let session = self
            .root()
            .live
            .borrow()
            .iter()
            .find(|s| s.id() == id)
            .cloned();
        match session {
            Some(session) => session.transition_complete(transition),
            None => debug!(session = %id, "transition complete for unknown session"),
        }
    }

    /// Drops a destroyed session, clearing the open pointer if it still
    /// refers to it.
    fn forget(self: &Rc<Self>, id: SessionId) {
        self.live.borrow_mut().retain(|s| s.id() != id);
        let is_open = self
            .open_session
            .borrow()
            .as_ref()
            .is_some_and(|s| s.id() == id);
        if is_open {
            self.set_active(None);
        }
    }
}

impl std::fmt::Debug for KeyboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardController")
            .field("is_child", &self.parent.is_some())
            .field("open_session", &self.open_session.borrow())
            .field("live", &self.live.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::SessionPhase;
    use crate::infrastructure::announcer::mock::RecordingAnnouncer;
    use crate::infrastructure::overlay::mock::{OverlayCall, RecordingOverlay};
    use std::time::Duration;
    use vkb_core::LayoutError;

    fn make_controller() -> (Rc<KeyboardController>, Rc<RecordingOverlay>) {
        let overlay = Rc::new(RecordingOverlay::new());
        let controller = KeyboardController::new(
            Rc::new(LayoutRegistry::builtin()),
            overlay.clone(),
            Rc::new(RecordingAnnouncer::new()),
        );
        (controller, overlay)
    }

    fn log_into(log: &Rc<RefCell<Vec<String>>>, entry: &str) -> impl Fn() + 'static {
        let log = Rc::clone(log);
        let entry = entry.to_string();
        move || log.borrow_mut().push(entry.clone())
    }

    #[test]
    fn test_open_resolves_locale_and_enters() {
        // Arrange
        let (controller, overlay) = make_controller();

        // Act
        let session = controller.open(Some("de-AT"), OpenConfig::default()).unwrap();

        // Assert
        assert_eq!(session.layout().name, "Deutsch");
        assert_eq!(session.phase(), SessionPhase::Entering);
        assert_eq!(overlay.calls().len(), 1);
        assert_eq!(controller.active_session().map(|s| s.id()), Some(session.id()));
    }

    #[test]
    fn test_open_without_locale_uses_default() {
        let (controller, _) = make_controller();
        let session = controller.open(None, OpenConfig::default()).unwrap();
        assert_eq!(session.layout().name, "US International");
    }

    #[test]
    fn test_open_unknown_locale_fails_without_state_change() {
        // Arrange
        let (controller, overlay) = make_controller();
        let first = controller.open(Some("fr"), OpenConfig::default()).unwrap();

        // Act
        let err = controller.open(Some("xx-YY"), OpenConfig::default()).unwrap_err();

        // Assert
        assert!(matches!(
            err,
            SessionError::NotFound(LayoutError::LocaleNotFound(_))
        ));
        assert_eq!(first.phase(), SessionPhase::Entering);
        assert_eq!(controller.active_session().map(|s| s.id()), Some(first.id()));
        assert_eq!(overlay.calls().len(), 1);
    }

    #[test]
    fn test_open_unknown_layout_name_is_not_found() {
        let (controller, _) = make_controller();
        let err = controller.open(Some("Dvorak"), OpenConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::NotFound(LayoutError::LayoutNotFound(_))
        ));
        assert!(!controller.is_open());
    }

    #[test]
    fn test_second_open_waits_for_first_exit() {
        // Arrange
        let (controller, overlay) = make_controller();
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = controller.open(Some("en-US"), OpenConfig::default()).unwrap();
        controller.transition_complete(first.id(), Transition::Enter);
        first.after_dismissed().subscribe(log_into(&log, "session1.exit"));

        // Act
        let second = controller.open(Some("ru"), OpenConfig::default()).unwrap();
        second.after_opened().subscribe(log_into(&log, "session2.enter"));

        // Assert: nothing entered yet, first is exiting
        assert_eq!(first.phase(), SessionPhase::Exiting);
        assert_eq!(second.phase(), SessionPhase::Idle);
        assert_eq!(overlay.calls(), vec![OverlayCall::Attach(first.id(), Default::default())]);

        // Act: host finishes the exit, then the entrance
        controller.transition_complete(first.id(), Transition::Exit);
        assert_eq!(second.phase(), SessionPhase::Entering);
        controller.transition_complete(second.id(), Transition::Enter);

        // Assert
        assert_eq!(*log.borrow(), vec!["session1.exit", "session2.enter"]);
        assert_eq!(
            overlay.calls(),
            vec![
                OverlayCall::Attach(first.id(), Default::default()),
                OverlayCall::Detach(first.id()),
                OverlayCall::Attach(second.id(), Default::default()),
            ]
        );
        assert_eq!(controller.active_session().map(|s| s.id()), Some(second.id()));
    }

    #[test]
    fn test_late_entrance_completion_does_not_end_exit() {
        // Arrange: replace the first session while it is still entering
        let (controller, overlay) = make_controller();
        let first = controller.open(Some("en"), OpenConfig::default()).unwrap();
        let second = controller.open(Some("de"), OpenConfig::default()).unwrap();
        assert_eq!(first.phase(), SessionPhase::Exiting);

        // Act: the host reports the interrupted entrance as finished
        controller.transition_complete(first.id(), Transition::Enter);

        // Assert: still exiting, nothing detached, second still queued
        assert_eq!(first.phase(), SessionPhase::Exiting);
        assert_eq!(second.phase(), SessionPhase::Idle);
        assert_eq!(overlay.calls(), vec![OverlayCall::Attach(first.id(), Default::default())]);

        // Act: the exit finishes
        controller.transition_complete(first.id(), Transition::Exit);

        // Assert
        assert_eq!(first.phase(), SessionPhase::Destroyed);
        assert_eq!(second.phase(), SessionPhase::Entering);
        assert_eq!(
            overlay.calls(),
            vec![
                OverlayCall::Attach(first.id(), Default::default()),
                OverlayCall::Detach(first.id()),
                OverlayCall::Attach(second.id(), Default::default()),
            ]
        );
    }

    #[test]
    fn test_dismiss_clears_active_session_after_exit() {
        let (controller, _) = make_controller();
        let session = controller.open(Some("es"), OpenConfig::default()).unwrap();

        controller.dismiss();
        assert!(controller.is_open());
        controller.transition_complete(session.id(), Transition::Exit);

        assert!(!controller.is_open());
        assert_eq!(session.phase(), SessionPhase::Destroyed);
    }

    #[test]
    fn test_dismiss_without_session_is_noop() {
        let (controller, overlay) = make_controller();
        controller.dismiss();
        assert!(overlay.calls().is_empty());
    }

    #[test]
    fn test_queued_session_dismissed_before_enter_never_attaches() {
        // Arrange
        let (controller, overlay) = make_controller();
        let first = controller.open(Some("en"), OpenConfig::default()).unwrap();
        let second = controller.open(Some("de"), OpenConfig::default()).unwrap();

        // Act: dismiss the queued session, then let the first one finish
        controller.dismiss();
        controller.transition_complete(first.id(), Transition::Exit);

        // Assert
        assert_eq!(second.phase(), SessionPhase::Destroyed);
        assert!(!controller.is_open());
        assert_eq!(
            overlay.calls(),
            vec![
                OverlayCall::Attach(first.id(), Default::default()),
                OverlayCall::Detach(first.id()),
            ]
        );
    }

    #[test]
    fn test_auto_dismiss_ignores_stale_session() {
        // Arrange
        let (controller, overlay) = make_controller();
        let config = OpenConfig {
            duration_ms: 500,
            ..OpenConfig::default()
        };
        let first = controller.open(Some("en"), config.clone()).unwrap();
        controller.transition_complete(first.id(), Transition::Enter);
        assert!(overlay
            .calls()
            .contains(&OverlayCall::ScheduleAutoDismiss(first.id(), Duration::from_millis(500))));

        let second = controller.open(Some("fr"), OpenConfig::default()).unwrap();
        controller.transition_complete(first.id(), Transition::Exit);
        controller.transition_complete(second.id(), Transition::Enter);

        // Act: the first session's timer fires late
        let dismissed = controller.dismiss_session(first.id());

        // Assert
        assert!(!dismissed);
        assert_eq!(second.phase(), SessionPhase::Visible);

        // Act: the matching session is dismissed
        assert!(controller.dismiss_session(second.id()));
        assert_eq!(second.phase(), SessionPhase::Exiting);
    }

    #[test]
    fn test_child_controller_shares_root_session() {
        // Arrange
        let (root, _) = make_controller();
        let child = root.child();
        let grandchild = child.child();

        // Act
        let session = grandchild.open(Some("ru"), OpenConfig::default()).unwrap();

        // Assert
        assert_eq!(root.active_session().map(|s| s.id()), Some(session.id()));
        assert_eq!(child.active_session().map(|s| s.id()), Some(session.id()));

        // Act: the root replaces it
        let next = root.open(Some("en"), OpenConfig::default()).unwrap();
        grandchild.transition_complete(session.id(), Transition::Exit);

        // Assert
        assert_eq!(session.phase(), SessionPhase::Destroyed);
        assert_eq!(next.phase(), SessionPhase::Entering);
        assert_eq!(grandchild.active_session().map(|s| s.id()), Some(next.id()));
    }

    #[test]
    fn test_child_outliving_parent_acts_as_root() {
        let (root, _) = make_controller();
        let child = root.child();
        drop(root);

        let session = child.open(Some("es"), OpenConfig::default()).unwrap();

        assert_eq!(child.active_session().map(|s| s.id()), Some(session.id()));
    }

    #[test]
    fn test_failed_attach_leaves_no_open_session() {
        let (controller, overlay) = make_controller();
        overlay.fail_attach("display lost");

        let err = controller.open(Some("en"), OpenConfig::default()).unwrap_err();

        assert!(matches!(err, SessionError::Overlay(_)));
        assert!(!controller.is_open());
    }
}
