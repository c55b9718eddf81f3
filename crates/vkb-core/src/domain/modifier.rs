//! Modifier state machine.
//!
//! The modifier is a 2-bit value: bit 0 is Shift, bit 1 is Alt.
//!
//! ```text
//!            invert_shift
//!    None  <------------->  Shift
//!     ^                       ^
//!     | invert_alt            | invert_alt
//!     v                       v
//!    Alt   <------------->  ShiftAlt
//!            invert_shift
//! ```
//!
//! Because the numeric value doubles as the slot index into a
//! [`KeyDefinition`], resolving the visible glyph is a single array access.
//! CapsLock is a separate sticky flag: it does not change the modifier, it
//! only inverts the Shift bit at lookup time.

use serde::{Deserialize, Serialize};

use super::icons::{IconSet, KeyIcon};
use super::key::{Glyph, KeyClass, KeyDefinition};

const SHIFT_BIT: u8 = 0b01;
const ALT_BIT: u8 = 0b10;

/// The current modifier combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum KeyboardModifier {
    #[default]
    None = 0,
    Shift = 1,
    Alt = 2,
    ShiftAlt = 3,
}

impl KeyboardModifier {
    /// All four states in slot order.
    pub const ALL: [KeyboardModifier; 4] = [
        KeyboardModifier::None,
        KeyboardModifier::Shift,
        KeyboardModifier::Alt,
        KeyboardModifier::ShiftAlt,
    ];

    /// Builds a modifier from its 2-bit encoding. Higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & (SHIFT_BIT | ALT_BIT) {
            0 => KeyboardModifier::None,
            1 => KeyboardModifier::Shift,
            2 => KeyboardModifier::Alt,
            _ => KeyboardModifier::ShiftAlt,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Slot index into a key's variant array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The literal name of this state, as a glyph would spell it.
    pub const fn name(self) -> &'static str {
        match self {
            KeyboardModifier::None => "None",
            KeyboardModifier::Shift => "Shift",
            KeyboardModifier::Alt => "Alt",
            KeyboardModifier::ShiftAlt => "ShiftAlt",
        }
    }

    pub const fn has_shift(self) -> bool {
        self.bits() & SHIFT_BIT != 0
    }

    pub const fn has_alt(self) -> bool {
        self.bits() & ALT_BIT != 0
    }

    /// None↔Alt, Shift↔ShiftAlt.
    pub const fn invert_alt(self) -> Self {
        Self::from_bits(self.bits() ^ ALT_BIT)
    }

    /// None↔Shift, Alt↔ShiftAlt.
    pub const fn invert_shift(self) -> Self {
        Self::from_bits(self.bits() ^ SHIFT_BIT)
    }

    /// Consumes one-shot modifiers after a literal key was clicked.
    ///
    /// The Alt check runs on the state left by the Shift step, so every
    /// starting state ends at `None`.
    pub fn after_key_click(self) -> Self {
        let mut next = self;
        if matches!(next, KeyboardModifier::Shift | KeyboardModifier::ShiftAlt) {
            next = next.invert_shift();
        }
        if matches!(next, KeyboardModifier::Alt | KeyboardModifier::ShiftAlt) {
            next = next.invert_alt();
        }
        next
    }
}

/// Returns the glyph visible on `key` for the given state.
pub fn resolve_glyph(key: &KeyDefinition, modifier: KeyboardModifier, caps_locked: bool) -> &Glyph {
    let effective = if caps_locked {
        modifier.invert_shift()
    } else {
        modifier
    };
    key.variant(effective.index())
}

/// Returns `true` if `key` should be highlighted as held.
///
/// A key is active when it resolves to CapsLock while caps is locked, or when
/// it resolves to the name of the current modifier (the Shift key while
/// Shift is on, the Alt key while Alt is on).
///
/// Only the key named exactly `Alt` matches: `AltGraph` and `AltLk` keys
/// still toggle Alt when clicked but are never highlighted.
pub fn is_active(key: &KeyDefinition, modifier: KeyboardModifier, caps_locked: bool) -> bool {
    let glyph = resolve_glyph(key, modifier, caps_locked);
    let caps_active = glyph.is_class(KeyClass::CapsLock) && caps_locked;
    let modifier_active = glyph.as_str() == modifier.name();
    caps_active || modifier_active
}

/// Next modifier after a literal key click.
pub fn on_key_click(modifier: KeyboardModifier) -> KeyboardModifier {
    modifier.after_key_click()
}

/// Next caps flag: `target` when given, otherwise the flipped flag.
pub fn on_caps_toggle(caps_locked: bool, target: Option<bool>) -> bool {
    target.unwrap_or(!caps_locked)
}

/// Modifier plus CapsLock: the complete per-session key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub modifier: KeyboardModifier,
    pub caps_locked: bool,
}

impl KeyState {
    pub fn new(modifier: KeyboardModifier, caps_locked: bool) -> Self {
        Self {
            modifier,
            caps_locked,
        }
    }

    pub fn resolve<'k>(&self, key: &'k KeyDefinition) -> &'k Glyph {
        resolve_glyph(key, self.modifier, self.caps_locked)
    }

    pub fn is_active(&self, key: &KeyDefinition) -> bool {
        is_active(key, self.modifier, self.caps_locked)
    }

    /// Icon for the resolved glyph, if it is a class key with an icon.
    pub fn key_icon<'i>(&self, key: &KeyDefinition, icons: &'i IconSet) -> Option<&'i KeyIcon> {
        self.resolve(key).class().and_then(|class| icons.get(class))
    }

    pub fn toggle_alt(&mut self) {
        self.modifier = self.modifier.invert_alt();
    }

    pub fn toggle_shift(&mut self) {
        self.modifier = self.modifier.invert_shift();
    }

    pub fn toggle_caps(&mut self, target: Option<bool>) {
        self.caps_locked = on_caps_toggle(self.caps_locked, target);
    }

    pub fn key_clicked(&mut self) {
        self.modifier = on_key_click(self.modifier);
    }
}
