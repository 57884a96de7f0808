use super::*;
use crate::storage::MemoryStore;

#[test]
fn parse_is_lenient() {
    assert_eq!(ThemeName::parse("purple"), Some(ThemeName::Purple));
    assert_eq!(ThemeName::parse(" Pink "), Some(ThemeName::Pink));
    assert_eq!(ThemeName::parse("teal"), None);
}

#[test]
fn every_theme_has_distinct_colors() {
    for name in ThemeName::ALL {
        assert!(name.primary().starts_with('#'));
        assert_ne!(name.primary(), name.accent(), "{name}");
    }
    assert_eq!(ThemeName::Green.primary(), "#10b981");
    assert_eq!(ThemeName::Green.accent(), "#34d399");
}

#[test]
fn load_defaults_to_blue_and_system_preference() {
    let store = MemoryStore::new();
    assert_eq!(ThemePreference::load(&store, true), ThemePreference { name: ThemeName::Blue, dark: true });
    assert_eq!(ThemePreference::load(&store, false), ThemePreference { name: ThemeName::Blue, dark: false });
}

#[test]
fn stored_mode_overrides_system_preference() {
    let store = MemoryStore::new();
    store.set(THEME_MODE_KEY, "light");
    store.set(THEME_NAME_KEY, "red");
    assert_eq!(ThemePreference::load(&store, true), ThemePreference { name: ThemeName::Red, dark: false });
}

#[test]
fn unknown_stored_name_falls_back() {
    let store = MemoryStore::new();
    store.set(THEME_NAME_KEY, "chartreuse");
    store.set(THEME_MODE_KEY, "sepia");
    assert_eq!(ThemePreference::load(&store, false), ThemePreference::default());
}

#[test]
fn save_writes_both_keys() {
    let store = MemoryStore::new();
    let mut pref = ThemePreference::default();
    pref.set_name(ThemeName::Orange);
    assert!(pref.toggle_dark());
    pref.save(&store);

    assert_eq!(store.get(THEME_NAME_KEY).as_deref(), Some("orange"));
    assert_eq!(store.get(THEME_MODE_KEY).as_deref(), Some("dark"));
    assert_eq!(ThemePreference::load(&store, false), pref);
}

#[test]
fn css_vars_follow_name() {
    let pref = ThemePreference { name: ThemeName::Pink, dark: false };
    assert_eq!(pref.css_vars(), [("--color-primary", "#ec4899"), ("--color-accent", "#f472b6")]);
}
