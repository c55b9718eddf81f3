//! Keyboard layout domain entity.
//!
//! A layout is a named grid of keys. Rows are rendered top to bottom, keys
//! left to right. The optional `lang` tags list the locales (for example
//! `"de"` or `"en-US"`) the layout is the natural choice for; the registry
//! indexes them to resolve a locale to a layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::key::{KeyDefinition, KeyPosition};

/// Errors raised while validating or resolving layouts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// No layout is mapped for the locale, neither exactly nor by language.
    #[error("no layout found for locale {0:?}")]
    LocaleNotFound(String),

    /// The registry has no layout with this name.
    #[error("no layout named {0:?}")]
    LayoutNotFound(String),

    /// The layout definition is structurally unusable.
    #[error("invalid layout {name:?}: {reason}")]
    InvalidLayout { name: String, reason: String },
}

impl LayoutError {
    /// Returns `true` for the "nothing matched" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LayoutError::LocaleNotFound(_) | LayoutError::LayoutNotFound(_)
        )
    }
}

/// A named keyboard layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    /// Locale tags this layout serves.
    #[serde(default)]
    pub lang: Vec<String>,
    /// Rows of keys, top to bottom.
    pub keys: Vec<Vec<KeyDefinition>>,
}

impl Layout {
    pub fn new(name: impl Into<String>, lang: &[&str], keys: Vec<Vec<KeyDefinition>>) -> Self {
        Self {
            name: name.into(),
            lang: lang.iter().map(|l| l.to_string()).collect(),
            keys,
        }
    }

    /// Checks that the layout can be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidLayout`] when the name is blank, there
    /// are no rows, or a row is empty.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let invalid = |reason: &str| LayoutError::InvalidLayout {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.trim().is_empty() {
            return Err(invalid("layout name is empty"));
        }
        if self.keys.is_empty() {
            return Err(invalid("layout has no rows"));
        }
        if let Some(row) = self.keys.iter().position(Vec::is_empty) {
            return Err(invalid(&format!("row {row} has no keys")));
        }
        Ok(())
    }

    pub fn rows(&self) -> &[Vec<KeyDefinition>] {
        &self.keys
    }

    pub fn key(&self, position: KeyPosition) -> Option<&KeyDefinition> {
        self.keys.get(position.row)?.get(position.column)
    }

    /// Iterates over every key together with its position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = (KeyPosition, &KeyDefinition)> + '_ {
        self.keys.iter().enumerate().flat_map(|(row, keys)| {
            keys.iter()
                .enumerate()
                .map(move |(column, key)| (KeyPosition::new(row, column), key))
        })
    }

    pub fn key_count(&self) -> usize {
        self.keys.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::key::KeyClass;

    fn make_layout() -> Layout {
        Layout::new(
            "Tiny",
            &["xx"],
            vec![
                vec![KeyDefinition::pair("a", "A"), KeyDefinition::pair("b", "B")],
                vec![KeyDefinition::uniform(KeyClass::Enter)],
            ],
        )
    }

    #[test]
    fn test_validate_accepts_well_formed_layout() {
        assert!(make_layout().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_row() {
        let mut layout = make_layout();
        layout.keys.push(Vec::new());
        let err = layout.validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidLayout { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validate_rejects_blank_name_and_no_rows() {
        let mut layout = make_layout();
        layout.name = "  ".to_string();
        assert!(layout.validate().is_err());

        let layout = Layout::new("Empty", &[], Vec::new());
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_positions_walk_rows_in_order() {
        let layout = make_layout();
        let positions: Vec<_> = layout.positions().map(|(p, _)| p).collect();
        assert_eq!(
            positions,
            vec![
                KeyPosition::new(0, 0),
                KeyPosition::new(0, 1),
                KeyPosition::new(1, 0)
            ]
        );
        assert_eq!(layout.key_count(), 3);
    }

    #[test]
    fn test_key_out_of_bounds_is_none() {
        let layout = make_layout();
        assert!(layout.key(KeyPosition::new(1, 1)).is_none());
        assert!(layout.key(KeyPosition::new(5, 0)).is_none());
    }

    #[test]
    fn test_layout_parses_from_toml() {
        let text = r#"
            name = "Mini"
            lang = ["mi"]
            keys = [
                [["q", "Q", "@", "Q"], ["Bksp", "Bksp", "Bksp", "Bksp"]],
            ]
        "#;
        let layout: Layout = toml::from_str(text).expect("layout should parse");
        assert_eq!(layout.name, "Mini");
        assert!(layout.keys[0][1].variant(0).is_class(KeyClass::Backspace));
    }
}
