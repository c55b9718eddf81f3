//! Built-in layout tables and locale resolution.
//!
//! The [`LayoutRegistry`] owns every known [`Layout`] plus a locale map built
//! from the layouts' `lang` tags. Hosts build it once at startup (built-ins,
//! then any custom layouts from configuration) and share it read-only.
//!
//! # Locale resolution
//!
//! ```text
//! "de-AT" ──exact──► locale map? ──no──► "de" ──► locale map? ──no──► LocaleNotFound
//!                        │yes                         │yes
//!                        ▼                            ▼
//!                   layout name                  layout name
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::key::KeyDefinition;
use crate::domain::layout::{Layout, LayoutError};

pub mod french;
pub mod german;
pub mod russian;
pub mod spanish;
pub mod us_international;

/// Table form of a layout: rows of `[None, Shift, Alt, ShiftAlt]` glyphs.
pub(crate) type KeyTable = &'static [&'static [[&'static str; 4]]];

/// Builds a [`Layout`] from a static key table.
pub(crate) fn build_layout(name: &str, lang: &[&str], table: KeyTable) -> Layout {
    let keys = table
        .iter()
        .map(|row| row.iter().map(|key| KeyDefinition::from_strs(*key)).collect())
        .collect();
    Layout::new(name, lang, keys)
}

/// Returns `true` if `value` looks like a locale tag (`"de"` or `"de-AT"`)
/// rather than a layout name.
pub fn is_locale_tag(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.len() {
        2 => bytes.iter().all(u8::is_ascii_lowercase),
        5 => {
            bytes[..2].iter().all(u8::is_ascii_lowercase)
                && bytes[2] == b'-'
                && bytes[3..].iter().all(u8::is_ascii_uppercase)
        }
        _ => false,
    }
}

/// Registry of layouts and the locale → layout-name map.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: HashMap<String, Layout>,
    locales: HashMap<String, String>,
    default_locale: String,
}

impl LayoutRegistry {
    /// Locale used when no locale is requested.
    pub const DEFAULT_LOCALE: &'static str = "en-US";

    /// Creates an empty registry.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            layouts: HashMap::new(),
            locales: HashMap::new(),
            default_locale: default_locale.into(),
        }
    }

    /// Creates a registry holding the built-in layouts.
    pub fn builtin() -> Self {
        let mut registry = Self::new(Self::DEFAULT_LOCALE);
        for layout in [
            us_international::layout(),
            german::layout(),
            french::layout(),
            spanish::layout(),
            russian::layout(),
        ] {
            if let Err(e) = registry.register(layout) {
                warn!("skipping built-in layout: {e}");
            }
        }
        debug!(
            layouts = registry.layouts.len(),
            locales = registry.locales.len(),
            "built-in layout registry ready"
        );
        registry
    }

    /// Replaces the default locale.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Adds a layout, replacing any layout with the same name, and maps its
    /// `lang` tags to it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidLayout`] if the layout fails validation;
    /// the registry is left unchanged.
    pub fn register(&mut self, layout: Layout) -> Result<(), LayoutError> {
        layout.validate()?;

        if self.layouts.contains_key(&layout.name) {
            debug!(layout = %layout.name, "replacing registered layout");
            self.locales.retain(|_, name| *name != layout.name);
        }
        for tag in &layout.lang {
            if let Some(previous) = self.locales.insert(tag.clone(), layout.name.clone()) {
                if previous != layout.name {
                    warn!(locale = %tag, from = %previous, to = %layout.name, "locale remapped");
                }
            }
        }
        self.layouts.insert(layout.name.clone(), layout);
        Ok(())
    }

    /// Maps a locale to a layout name, using the default locale when `locale`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LocaleNotFound`] if neither the full tag nor its
    /// language subtag is mapped.
    pub fn map_locale(&self, locale: Option<&str>) -> Result<&str, LayoutError> {
        self.map_locale_or(locale, &self.default_locale)
    }

    /// Maps a locale to a layout name, using `fallback` when `locale` is
    /// `None` or empty.
    ///
    /// Lookup order: the exact tag, then the language subtag (the part before
    /// the first `-`).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LocaleNotFound`] if nothing matches.
    pub fn map_locale_or(
        &self,
        locale: Option<&str>,
        fallback: &str,
    ) -> Result<&str, LayoutError> {
        let locale = locale.filter(|l| !l.is_empty()).unwrap_or(fallback);

        if let Some(name) = self.locales.get(locale) {
            return Ok(name.as_str());
        }

        let language = locale.split('-').next().unwrap_or(locale);
        if language != locale {
            if let Some(name) = self.locales.get(language) {
                debug!(%locale, %language, layout = %name, "locale resolved by language subtag");
                return Ok(name.as_str());
            }
        }

        Err(LayoutError::LocaleNotFound(locale.to_string()))
    }

    /// Resolves a locale to its layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LocaleNotFound`] if the locale is unmapped, or
    /// [`LayoutError::LayoutNotFound`] if it maps to a missing layout.
    pub fn layout_for_locale(&self, locale: Option<&str>) -> Result<&Layout, LayoutError> {
        let name = self.map_locale(locale)?;
        self.layout_by_name(name)
    }

    /// Looks up a layout by name.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::LayoutNotFound`] if no layout has this name.
    pub fn layout_by_name(&self, name: &str) -> Result<&Layout, LayoutError> {
        self.layouts
            .get(name)
            .ok_or_else(|| LayoutError::LayoutNotFound(name.to_string()))
    }

    /// Resolves either a locale tag or a layout name.
    ///
    /// Strings shaped like `"de"` / `"de-AT"` go through the locale map; any
    /// other string is a layout name. `None` resolves the default locale.
    ///
    /// # Errors
    ///
    /// Propagates the lookup failure of whichever path was taken.
    pub fn resolve(&self, layout_or_locale: Option<&str>) -> Result<&Layout, LayoutError> {
        match layout_or_locale {
            Some(name) if !is_locale_tag(name) => self.layout_by_name(name),
            locale => self.layout_for_locale(locale),
        }
    }

    /// All mapped locale tags, sorted.
    pub fn available_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// All layout names, sorted.
    pub fn layout_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
