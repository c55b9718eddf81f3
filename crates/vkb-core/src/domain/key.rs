//! Glyphs and key definitions.
//!
//! Every physical key of a layout carries exactly four glyph variants, one per
//! [`KeyboardModifier`](super::modifier::KeyboardModifier) value:
//!
//! | Slot | Modifier   | Example (`e` key, US International) |
//! |------|------------|--------------------------------------|
//! | 0    | `None`     | `e`                                  |
//! | 1    | `Shift`    | `E`                                  |
//! | 2    | `Alt`      | `é`                                  |
//! | 3    | `ShiftAlt` | `É`                                  |
//!
//! A glyph is either a literal text fragment that is typed into the bound
//! input, or a *class key* such as `Enter` or `CapsLock` that triggers an
//! action instead of producing text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of glyph variants every key carries.
pub const VARIANT_COUNT: usize = 4;

/// Non-literal keys.
///
/// The string form of each class key is the DOM `KeyboardEvent.key` value a
/// physical keyboard reports for it, so physical events can be matched
/// against rendered keys by plain string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyClass {
    Alt,
    AltGraph,
    AltLk,
    Backspace,
    CapsLock,
    Enter,
    Shift,
    Space,
    Tab,
}

impl KeyClass {
    /// All class keys, in declaration order.
    pub const ALL: [KeyClass; 9] = [
        KeyClass::Alt,
        KeyClass::AltGraph,
        KeyClass::AltLk,
        KeyClass::Backspace,
        KeyClass::CapsLock,
        KeyClass::Enter,
        KeyClass::Shift,
        KeyClass::Space,
        KeyClass::Tab,
    ];

    /// Returns the DOM key value for this class key.
    pub const fn key_value(self) -> &'static str {
        match self {
            KeyClass::Alt => "Alt",
            KeyClass::AltGraph => "AltGraph",
            KeyClass::AltLk => "AltLk",
            KeyClass::Backspace => "Backspace",
            KeyClass::CapsLock => "CapsLock",
            KeyClass::Enter => "Enter",
            KeyClass::Shift => "Shift",
            KeyClass::Space => " ",
            KeyClass::Tab => "Tab",
        }
    }

    /// Parses a class key name, accepting DOM key values and common aliases.
    ///
    /// Returns `None` for anything that is not a class key.
    pub fn from_name(name: &str) -> Option<Self> {
        let class = match name {
            "Alt" => KeyClass::Alt,
            "AltGraph" | "AltGr" => KeyClass::AltGraph,
            "AltLk" => KeyClass::AltLk,
            "Backspace" | "Bksp" => KeyClass::Backspace,
            "CapsLock" | "Caps" => KeyClass::CapsLock,
            "Enter" => KeyClass::Enter,
            "Shift" => KeyClass::Shift,
            " " | "Space" => KeyClass::Space,
            "Tab" => KeyClass::Tab,
            _ => return None,
        };
        Some(class)
    }

    /// Returns `true` for the Alt family (Alt, AltGraph, AltLk).
    pub fn is_alt(self) -> bool {
        matches!(self, KeyClass::Alt | KeyClass::AltGraph | KeyClass::AltLk)
    }
}

impl fmt::Display for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_value())
    }
}

impl FromStr for KeyClass {
    type Err = UnknownKeyClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyClass::from_name(s).ok_or_else(|| UnknownKeyClass(s.to_string()))
    }
}

impl TryFrom<String> for KeyClass {
    type Error = UnknownKeyClass;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyClass> for String {
    fn from(class: KeyClass) -> Self {
        class.key_value().to_string()
    }
}

/// Returned when a string does not name a [`KeyClass`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key class: {0:?}")]
pub struct UnknownKeyClass(pub String);

/// One glyph variant of a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Glyph {
    /// Literal text typed into the bound input.
    Text(String),
    /// An action key.
    Class(KeyClass),
}

impl Glyph {
    /// Returns the string the glyph is compared against: the literal text or
    /// the class key's DOM value.
    pub fn as_str(&self) -> &str {
        match self {
            Glyph::Text(text) => text,
            Glyph::Class(class) => class.key_value(),
        }
    }

    /// Returns the class key, if this glyph is one.
    pub fn class(&self) -> Option<KeyClass> {
        match self {
            Glyph::Class(class) => Some(*class),
            Glyph::Text(_) => None,
        }
    }

    /// Returns `true` if this glyph is the given class key.
    pub fn is_class(&self, class: KeyClass) -> bool {
        self.class() == Some(class)
    }
}

impl From<&str> for Glyph {
    fn from(value: &str) -> Self {
        match KeyClass::from_name(value) {
            Some(class) => Glyph::Class(class),
            None => Glyph::Text(value.to_string()),
        }
    }
}

impl From<String> for Glyph {
    fn from(value: String) -> Self {
        match KeyClass::from_name(&value) {
            Some(class) => Glyph::Class(class),
            None => Glyph::Text(value),
        }
    }
}

impl From<KeyClass> for Glyph {
    fn from(class: KeyClass) -> Self {
        Glyph::Class(class)
    }
}

impl From<Glyph> for String {
    fn from(glyph: Glyph) -> Self {
        match glyph {
            Glyph::Text(text) => text,
            Glyph::Class(class) => class.into(),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four glyph variants of one physical key, indexed by modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyDefinition([Glyph; VARIANT_COUNT]);

impl KeyDefinition {
    /// Creates a key from its four variants `[None, Shift, Alt, ShiftAlt]`.
    pub fn from_strs(variants: [&str; VARIANT_COUNT]) -> Self {
        Self(variants.map(Glyph::from))
    }

    /// A key that shows the same class key under every modifier.
    pub fn uniform(class: KeyClass) -> Self {
        Self([
            Glyph::Class(class),
            Glyph::Class(class),
            Glyph::Class(class),
            Glyph::Class(class),
        ])
    }

    /// A key without Alt variants: the Alt slots repeat `base` and `shifted`.
    pub fn pair(base: &str, shifted: &str) -> Self {
        Self::from_strs([base, shifted, base, shifted])
    }

    /// Returns the glyph in slot `index`.
    ///
    /// `index` comes from [`KeyboardModifier::index`](super::modifier::KeyboardModifier::index),
    /// which is always below [`VARIANT_COUNT`].
    pub fn variant(&self, index: usize) -> &Glyph {
        &self.0[index]
    }

    /// Returns all four variants.
    pub fn variants(&self) -> &[Glyph; VARIANT_COUNT] {
        &self.0
    }
}

/// Row/column coordinate of a key inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPosition {
    pub row: usize,
    pub column: usize,
}

impl KeyPosition {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
