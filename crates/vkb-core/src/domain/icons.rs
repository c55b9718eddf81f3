//! Icons drawn in place of text on class keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::key::KeyClass;

/// A named font icon or an SVG icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyIcon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_icon: Option<String>,
}

impl KeyIcon {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            svg_icon: None,
        }
    }

    pub fn svg(svg_icon: impl Into<String>) -> Self {
        Self {
            name: None,
            svg_icon: Some(svg_icon.into()),
        }
    }
}

/// Class key → icon lookup.
///
/// [`IconSet::default`] holds the stock icons; sessions layer their custom
/// icons on top with [`IconSet::with_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    icons: BTreeMap<KeyClass, KeyIcon>,
}

impl IconSet {
    pub fn get(&self, class: KeyClass) -> Option<&KeyIcon> {
        self.icons.get(&class)
    }

    pub fn insert(&mut self, class: KeyClass, icon: KeyIcon) {
        self.icons.insert(class, icon);
    }

    /// Returns a copy of this set with `overrides` replacing matching entries.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a KeyClass, &'a KeyIcon)>,
    {
        let mut merged = self.clone();
        for (class, icon) in overrides {
            merged.insert(*class, icon.clone());
        }
        merged
    }
}

impl Default for IconSet {
    fn default() -> Self {
        let icons = [
            (KeyClass::Backspace, KeyIcon::named("keyboard_backspace")),
            (KeyClass::CapsLock, KeyIcon::named("keyboard_capslock")),
            (KeyClass::Enter, KeyIcon::named("keyboard_return")),
            (KeyClass::Shift, KeyIcon::named("keyboard_arrow_up")),
            (KeyClass::Space, KeyIcon::named(" ")),
            (KeyClass::Tab, KeyIcon::named("keyboard_tab")),
        ];
        Self {
            icons: icons.into_iter().collect(),
        }
    }
}
