//! Integration tests for locale resolution and glyph lookup.
//!
//! These tests go through the public `vkb_core` API only: the built-in
//! registry, a resolved layout, and the key state that reads it.

use vkb_core::{KeyPosition, KeyState, KeyboardModifier, LayoutError, LayoutRegistry};

const KEY_E: KeyPosition = KeyPosition::new(1, 3);

// ── Helpers ───────────────────────────────────────────────────────────────────

fn glyph_at(registry: &LayoutRegistry, locale: &str, state: KeyState) -> String {
    let layout = registry.resolve(Some(locale)).expect("locale must resolve");
    let key = layout.key(KEY_E).expect("e key present");
    state.resolve(key).as_str().to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_every_builtin_locale_resolves_to_a_layout() {
    let registry = LayoutRegistry::builtin();
    for locale in registry.available_locales() {
        let layout = registry
            .layout_for_locale(Some(locale))
            .unwrap_or_else(|e| panic!("{locale} must resolve: {e}"));
        assert!(layout.lang.iter().any(|l| l == locale));
    }
}

#[test]
fn test_regional_tags_fall_back_to_language() {
    let registry = LayoutRegistry::builtin();

    assert_eq!(registry.map_locale(Some("de-AT")), Ok("Deutsch"));
    assert_eq!(registry.map_locale(Some("fr-CA")), Ok("Français"));
    assert_eq!(registry.map_locale(Some("en-GB")), Ok("US International"));
}

#[test]
fn test_unknown_locale_and_layout_are_not_found() {
    let registry = LayoutRegistry::builtin();

    let locale_err = registry.resolve(Some("xx-XX")).unwrap_err();
    let layout_err = registry.resolve(Some("Colemak")).unwrap_err();

    assert_eq!(locale_err, LayoutError::LocaleNotFound("xx-XX".to_string()));
    assert_eq!(layout_err, LayoutError::LayoutNotFound("Colemak".to_string()));
    assert!(locale_err.is_not_found() && layout_err.is_not_found());
}

#[test]
fn test_same_key_differs_per_layout_under_alt() {
    let registry = LayoutRegistry::builtin();
    let alt = KeyState::new(KeyboardModifier::Alt, false);

    assert_eq!(glyph_at(&registry, "en-US", alt), "é");
    assert_eq!(glyph_at(&registry, "de", alt), "€");
}

#[test]
fn test_caps_lock_and_shift_cancel_out() {
    let registry = LayoutRegistry::builtin();

    let caps = KeyState::new(KeyboardModifier::None, true);
    let caps_shift = KeyState::new(KeyboardModifier::Shift, true);
    let shift = KeyState::new(KeyboardModifier::Shift, false);

    assert_eq!(glyph_at(&registry, "ru", caps), glyph_at(&registry, "ru", shift));
    assert_eq!(
        glyph_at(&registry, "ru", caps_shift),
        glyph_at(&registry, "ru", KeyState::default())
    );
    assert_ne!(glyph_at(&registry, "ru", caps), glyph_at(&registry, "ru", caps_shift));
}

#[test]
fn test_one_shot_modifiers_reset_after_literal_click() {
    for modifier in KeyboardModifier::ALL {
        let mut state = KeyState::new(modifier, true);
        state.key_clicked();
        assert_eq!(state.modifier, KeyboardModifier::None);
        assert!(state.caps_locked, "CapsLock is sticky");
    }
}
