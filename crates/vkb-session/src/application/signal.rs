//! Payload-free event signals.
//!
//! A [`Signal`] is a list of callbacks. [`Signal::emit`] calls every listener
//! registered at the moment of emission, in registration order. Nothing is
//! buffered: a listener added after an emission does not see it.
//!
//! Emission iterates over a snapshot of the listener list, so a listener may
//! subscribe, unsubscribe, or trigger further emissions without tripping a
//! `RefCell` borrow.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Listener = Rc<dyn Fn()>;

/// Token returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Default)]
pub struct Signal {
    listeners: RefCell<Vec<(Subscription, Listener)>>,
    next_id: Cell<u64>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns its subscription token.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = Subscription(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }

    /// Calls every currently registered listener once.
    pub fn emit(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_every_subscriber() {
        // Arrange
        let signal = Signal::new();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            signal.subscribe(move || hits.set(hits.get() + 1));
        }

        // Act
        signal.emit();
        signal.emit();

        // Assert
        assert_eq!(hits.get(), 6);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let signal = Signal::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let sub = signal.subscribe(move || h.set(h.get() + 1));

        assert!(signal.unsubscribe(sub));
        assert!(!signal.unsubscribe(sub));
        signal.emit();

        assert_eq!(hits.get(), 0);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_emission_is_not_buffered_for_late_subscribers() {
        let signal = Signal::new();
        signal.emit();

        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        signal.subscribe(move || h.set(h.get() + 1));

        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_listener_may_subscribe_during_emit() {
        let signal = Rc::new(Signal::new());
        let weak = Rc::downgrade(&signal);
        signal.subscribe(move || {
            if let Some(signal) = weak.upgrade() {
                signal.subscribe(|| {});
            }
        });

        signal.emit();

        assert_eq!(signal.listener_count(), 2);
    }
}
