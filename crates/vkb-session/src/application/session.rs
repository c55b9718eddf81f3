//! One open keyboard: layout, key state, bound input, and lifecycle.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──begin_enter──▶ Entering ──complete(Enter)──▶ Visible
//!                          │                             │
//!                          └───────────dismiss───────────┤
//!                                                        ▼
//!                       Destroyed ◀──complete(Exit)── Exiting
//! ```
//!
//! Both visual transitions are finished by the host: the session never
//! times its own animations. The overlay content is detached only when the
//! exit transition reports completion, and `after_dismissed` fires right
//! after that.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;
use vkb_core::{
    Glyph, IconSet, KeyClass, KeyDefinition, KeyIcon, KeyPosition, KeyState, KeyboardModifier,
    Layout, LayoutError,
};

use super::host::{Announcer, InputTarget, OverlayError, OverlayHost, Placement};
use super::open_config::OpenConfig;
use super::signal::Signal;

/// Unique identifier of a keyboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Entering,
    Visible,
    Exiting,
    Destroyed,
}

/// A visual transition the host reports as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Exit,
}

/// A physical keyboard event forwarded by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalKeyEvent {
    /// DOM key value, e.g. `"a"`, `"Shift"`, `" "`.
    pub key: String,
    /// CapsLock state reported with the event.
    pub caps_lock: bool,
}

impl PhysicalKeyEvent {
    pub fn new(key: impl Into<String>, caps_lock: bool) -> Self {
        Self {
            key: key.into(),
            caps_lock,
        }
    }
}

/// Errors raised by sessions and the controller.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested layout or locale does not resolve.
    #[error(transparent)]
    NotFound(#[from] LayoutError),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("no key at row {}, column {}", .0.row, .0.column)]
    NoSuchKey(KeyPosition),

    #[error(transparent)]
    Overlay(#[from] OverlayError),
}

/// Render model of one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyView {
    pub position: KeyPosition,
    pub glyph: Glyph,
    pub icon: Option<KeyIcon>,
    pub active: bool,
    pub pressed: bool,
}

/// Shared handle to a session.
pub type SessionHandle = Rc<KeyboardSession>;

pub struct KeyboardSession {
    id: SessionId,
    layout: Layout,
    config: OpenConfig,
    icons: IconSet,
    state: Cell<KeyState>,
    phase: Cell<SessionPhase>,
    attached: Cell<bool>,
    cancelled: Cell<bool>,
    pressed: RefCell<BTreeSet<KeyPosition>>,
    input: RefCell<Option<Rc<RefCell<dyn InputTarget>>>>,
    overlay: Rc<dyn OverlayHost>,
    announcer: Rc<dyn Announcer>,
    enter_click: Signal,
    caps_click: Signal,
    alt_click: Signal,
    shift_click: Signal,
    after_opened: Signal,
    after_dismissed: Signal,
}

impl KeyboardSession {
    /// Creates an idle session with no modifier and CapsLock off.
    ///
    /// The config's custom icons are layered over the stock icon set.
    pub fn new(
        layout: Layout,
        config: OpenConfig,
        overlay: Rc<dyn OverlayHost>,
        announcer: Rc<dyn Announcer>,
    ) -> Self {
        let icons = IconSet::default().with_overrides(&config.custom_icons);
        Self {
            id: SessionId::new(),
            layout,
            config,
            icons,
            state: Cell::new(KeyState::default()),
            phase: Cell::new(SessionPhase::Idle),
            attached: Cell::new(false),
            cancelled: Cell::new(false),
            pressed: RefCell::new(BTreeSet::new()),
            input: RefCell::new(None),
            overlay,
            announcer,
            enter_click: Signal::new(),
            caps_click: Signal::new(),
            alt_click: Signal::new(),
            shift_click: Signal::new(),
            after_opened: Signal::new(),
            after_dismissed: Signal::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &OpenConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    pub fn modifier(&self) -> KeyboardModifier {
        self.state.get().modifier
    }

    pub fn caps_locked(&self) -> bool {
        self.state.get().caps_locked
    }

    pub fn dark_theme(&self) -> Option<bool> {
        self.config.dark_theme
    }

    // ── Signals ──────────────────────────────────────────────────────────

    /// Enter was clicked on a single-line input.
    pub fn enter_click(&self) -> &Signal {
        &self.enter_click
    }

    pub fn caps_click(&self) -> &Signal {
        &self.caps_click
    }

    pub fn alt_click(&self) -> &Signal {
        &self.alt_click
    }

    pub fn shift_click(&self) -> &Signal {
        &self.shift_click
    }

    /// Fired once the entrance transition completed.
    pub fn after_opened(&self) -> &Signal {
        &self.after_opened
    }

    /// Fired once the session is destroyed and its content detached.
    pub fn after_dismissed(&self) -> &Signal {
        &self.after_dismissed
    }

    // ── Input binding ────────────────────────────────────────────────────

    /// Binds the text field that receives typed text.
    pub fn bind_input(&self, target: Rc<RefCell<dyn InputTarget>>) {
        *self.input.borrow_mut() = Some(target);
    }

    pub fn unbind_input(&self) {
        self.input.borrow_mut().take();
    }

    fn with_input(&self, f: impl FnOnce(&mut dyn InputTarget)) {
        let target = self.input.borrow().clone();
        if let Some(target) = target {
            f(&mut *target.borrow_mut());
        }
    }

    fn input_is_multiline(&self) -> bool {
        let target = self.input.borrow().clone();
        target.is_some_and(|t| t.borrow().is_multiline())
    }

    // ── Queries ──────────────────────────────────────────────────────────

    fn key(&self, position: KeyPosition) -> Result<&KeyDefinition, SessionError> {
        self.layout
            .key(position)
            .ok_or(SessionError::NoSuchKey(position))
    }

    /// Glyph currently shown at `position`.
    pub fn modified_key(&self, position: KeyPosition) -> Option<&Glyph> {
        let key = self.layout.key(position)?;
        Some(self.state.get().resolve(key))
    }

    /// `true` if the key at `position` is highlighted as a held modifier.
    pub fn is_active(&self, position: KeyPosition) -> bool {
        self.layout
            .key(position)
            .is_some_and(|key| self.state.get().is_active(key))
    }

    pub fn key_icon(&self, position: KeyPosition) -> Option<&KeyIcon> {
        let key = self.layout.key(position)?;
        self.state.get().key_icon(key, &self.icons)
    }

    /// `true` while the matching physical key is held down.
    pub fn is_pressed(&self, position: KeyPosition) -> bool {
        self.pressed.borrow().contains(&position)
    }

    /// The whole keyboard as it should be drawn right now.
    pub fn rows(&self) -> Vec<Vec<KeyView>> {
        let state = self.state.get();
        let pressed = self.pressed.borrow();
        self.layout
            .rows()
            .iter()
            .enumerate()
            .map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(|(column, key)| {
                        let position = KeyPosition::new(row, column);
                        KeyView {
                            position,
                            glyph: state.resolve(key).clone(),
                            icon: state.key_icon(key, &self.icons).cloned(),
                            active: state.is_active(key),
                            pressed: pressed.contains(&position),
                        }
                    })
                    .collect()
            })
            .collect()
    }

    // ── Click handlers ───────────────────────────────────────────────────

    /// Toggles CapsLock, or sets it to `target`, then emits `caps_click`.
    pub fn on_caps_click(&self, target: Option<bool>) {
        self.update_state(|s| s.toggle_caps(target));
        self.caps_click.emit();
    }

    pub fn on_alt_click(&self) {
        self.update_state(KeyState::toggle_alt);
        self.alt_click.emit();
    }

    pub fn on_shift_click(&self) {
        self.update_state(KeyState::toggle_shift);
        self.shift_click.emit();
    }

    /// Types `text` and consumes one-shot modifiers.
    pub fn on_key_click(&self, text: &str) {
        self.with_input(|input| input.insert_text(text));
        self.update_state(KeyState::key_clicked);
    }

    fn update_state(&self, f: impl FnOnce(&mut KeyState)) {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);
    }

    /// Handles a click on the virtual key at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSuchKey`] if the layout has no key there.
    pub fn click_key(&self, position: KeyPosition) -> Result<(), SessionError> {
        let glyph = self.state.get().resolve(self.key(position)?).clone();
        if self.phase.get() == SessionPhase::Destroyed {
            debug!(session = %self.id, ?position, "click on destroyed session ignored");
            return Ok(());
        }
        if self.config.is_debug {
            debug!(session = %self.id, ?position, glyph = %glyph, "virtual key click");
        }

        match glyph.class() {
            Some(class) if class.is_alt() => self.on_alt_click(),
            Some(KeyClass::Backspace) => self.with_input(|input| input.delete_backward()),
            Some(KeyClass::CapsLock) => self.on_caps_click(None),
            Some(KeyClass::Enter) => {
                if self.input_is_multiline() {
                    self.with_input(|input| input.insert_text("\n"));
                } else {
                    self.enter_click.emit();
                }
            }
            Some(KeyClass::Shift) => self.on_shift_click(),
            Some(KeyClass::Space) => self.with_input(|input| input.insert_text(" ")),
            Some(KeyClass::Tab) => self.with_input(|input| input.insert_text("\t")),
            Some(_) => {}
            None => self.on_key_click(glyph.as_str()),
        }
        Ok(())
    }

    // ── Physical key mirroring ───────────────────────────────────────────

    /// Mirrors a physical keydown: highlights matching keys and follows
    /// CapsLock, Alt, and Shift without toggling a modifier twice.
    pub fn handle_key_down(&self, event: &PhysicalKeyEvent) {
        if self.phase.get() == SessionPhase::Destroyed {
            return;
        }
        if self.config.is_debug {
            debug!(session = %self.id, key = %event.key, caps = event.caps_lock, "keydown");
        }

        let state = self.state.get();
        {
            let mut pressed = self.pressed.borrow_mut();
            for (position, key) in self.layout.positions() {
                if state.resolve(key).as_str() == event.key {
                    pressed.insert(position);
                }
            }
        }

        match KeyClass::from_name(&event.key) {
            Some(KeyClass::CapsLock) => self.on_caps_click(Some(event.caps_lock)),
            Some(class) if class.is_alt() && !state.modifier.has_alt() => self.on_alt_click(),
            Some(KeyClass::Shift) if !state.modifier.has_shift() => self.on_shift_click(),
            _ => {}
        }
    }

    /// Mirrors a physical keyup: clears highlights and releases Alt or Shift
    /// if they are currently on.
    pub fn handle_key_up(&self, event: &PhysicalKeyEvent) {
        if self.phase.get() == SessionPhase::Destroyed {
            return;
        }
        if self.config.is_debug {
            debug!(session = %self.id, key = %event.key, "keyup");
        }

        // Any variant may have been the one pressed: the modifier can change
        // between keydown and keyup.
        self.pressed.borrow_mut().retain(|position| {
            self.layout.key(*position).map_or(true, |key| {
                !key.variants().iter().any(|g| g.as_str() == event.key)
            })
        });

        let modifier = self.state.get().modifier;
        match KeyClass::from_name(&event.key) {
            Some(class) if class.is_alt() && modifier.has_alt() => self.on_alt_click(),
            Some(KeyClass::Shift) if modifier.has_shift() => self.on_shift_click(),
            _ => {}
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Mounts the keyboard panel on the overlay.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidOperation`] if content is already attached,
    /// [`SessionError::Overlay`] if the host refuses.
    pub fn attach_content(&self) -> Result<(), SessionError> {
        if self.attached.get() {
            return Err(SessionError::InvalidOperation(format!(
                "keyboard content of session {} is already attached",
                self.id
            )));
        }
        self.overlay.attach(self.id, Placement::default())?;
        self.attached.set(true);
        Ok(())
    }

    fn detach_content(&self) {
        if self.attached.replace(false) {
            self.overlay.detach(self.id);
        }
    }

    /// Starts the entrance transition.
    ///
    /// A session dismissed before it entered is destroyed right away. If the
    /// overlay refuses the content the session is destroyed as well and the
    /// error is returned.
    pub fn begin_enter(&self) -> Result<(), SessionError> {
        if self.phase.get() != SessionPhase::Idle {
            return Err(SessionError::InvalidOperation(format!(
                "session {} has already entered",
                self.id
            )));
        }
        if self.cancelled.get() {
            debug!(session = %self.id, "session dismissed before entering");
            self.finish_exit();
            return Ok(());
        }
        if let Err(e) = self.attach_content() {
            self.finish_exit();
            return Err(e);
        }
        self.phase.set(SessionPhase::Entering);
        info!(session = %self.id, layout = %self.layout.name, "keyboard entering");
        Ok(())
    }

    /// Requests the exit transition. Repeated calls are no-ops.
    pub fn dismiss(&self) {
        match self.phase.get() {
            SessionPhase::Entering | SessionPhase::Visible => {
                self.phase.set(SessionPhase::Exiting);
                info!(session = %self.id, "keyboard exiting");
            }
            SessionPhase::Idle => self.cancelled.set(true),
            SessionPhase::Exiting | SessionPhase::Destroyed => {}
        }
    }

    /// Called by the host when `transition` finished.
    ///
    /// A completion that does not match the phase is ignored: an entrance
    /// still finishing after `dismiss` does not end the exit.
    pub fn transition_complete(&self, transition: Transition) {
        match (self.phase.get(), transition) {
            (SessionPhase::Entering, Transition::Enter) => {
                self.phase.set(SessionPhase::Visible);
                info!(session = %self.id, "keyboard visible");
                if !self.config.announcement_message.is_empty() {
                    self.announcer
                        .announce(&self.config.announcement_message, self.config.politeness);
                }
                if let Some(after) = self.config.auto_dismiss() {
                    self.overlay.schedule_auto_dismiss(self.id, after);
                }
                self.after_opened.emit();
            }
            (SessionPhase::Exiting, Transition::Exit) => self.finish_exit(),
            (phase, transition) => {
                debug!(session = %self.id, ?phase, ?transition, "transition complete ignored");
            }
        }
    }

    fn finish_exit(&self) {
        self.detach_content();
        self.pressed.borrow_mut().clear();
        self.unbind_input();
        self.phase.set(SessionPhase::Destroyed);
        info!(session = %self.id, "keyboard dismissed");
        self.after_dismissed.emit();
    }
}

impl fmt::Debug for KeyboardSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardSession")
            .field("id", &self.id)
            .field("layout", &self.layout.name)
            .field("phase", &self.phase.get())
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}
