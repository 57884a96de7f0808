//! Theme state: color theme plus dark mode.
//!
//! Lives in a `RwSignal<ThemeState>` provided by `app::App`; persistence
//! and DOM application go through `util::theme`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use retina::theme::{ThemeName, ThemePreference};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
}

impl ThemeState {
    #[must_use]
    pub fn new(preference: ThemePreference) -> Self {
        Self { preference }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.preference.dark
    }

    #[must_use]
    pub fn name(&self) -> ThemeName {
        self.preference.name
    }

    #[must_use]
    pub fn primary(&self) -> &'static str {
        self.preference.name.primary()
    }

    /// Glyph for the dark-mode toggle button.
    #[must_use]
    pub fn toggle_icon(&self) -> &'static str {
        if self.preference.dark { "☀" } else { "☾" }
    }
}
