//! Color theme and dark-mode preference.
//!
//! Persisted in `localStorage` under `themeName` (color key) and `theme`
//! (`dark`/`light`). Without a stored mode the system preference decides.
//! The browser layer applies the result as a `dark` class on `<html>` plus
//! two CSS custom properties.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::storage::{KeyValueStore, THEME_MODE_KEY, THEME_NAME_KEY};

pub const PRIMARY_CSS_VAR: &str = "--color-primary";
pub const ACCENT_CSS_VAR: &str = "--color-accent";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeName {
    #[default]
    Blue,
    Purple,
    Green,
    Red,
    Orange,
    Pink,
}

impl ThemeName {
    pub const ALL: [Self; 6] = [Self::Blue, Self::Purple, Self::Green, Self::Red, Self::Orange, Self::Pink];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Pink => "pink",
        }
    }

    /// Lenient parse: case and surrounding whitespace are ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|name| name.key().eq_ignore_ascii_case(raw))
    }

    #[must_use]
    pub fn primary(self) -> &'static str {
        match self {
            Self::Blue => "#3b82f6",
            Self::Purple => "#8b5cf6",
            Self::Green => "#10b981",
            Self::Red => "#ef4444",
            Self::Orange => "#f97316",
            Self::Pink => "#ec4899",
        }
    }

    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Self::Blue => "#60a5fa",
            Self::Purple => "#a78bfa",
            Self::Green => "#34d399",
            Self::Red => "#f87171",
            Self::Orange => "#fb923c",
            Self::Pink => "#f472b6",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub name: ThemeName,
    pub dark: bool,
}

impl ThemePreference {
    /// Read the stored preference. Unknown color keys fall back to blue.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore, system_prefers_dark: bool) -> Self {
        let name = store.get(THEME_NAME_KEY).and_then(|raw| ThemeName::parse(&raw)).unwrap_or_default();
        let dark = match store.get(THEME_MODE_KEY).as_deref() {
            Some("dark") => true,
            Some("light") => false,
            _ => system_prefers_dark,
        };
        Self { name, dark }
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        store.set(THEME_NAME_KEY, self.name.key());
        store.set(THEME_MODE_KEY, self.mode());
    }

    #[must_use]
    pub fn mode(&self) -> &'static str {
        if self.dark { "dark" } else { "light" }
    }

    pub fn toggle_dark(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    pub fn set_name(&mut self, name: ThemeName) {
        self.name = name;
    }

    /// `(property, value)` pairs for the document root.
    #[must_use]
    pub fn css_vars(&self) -> [(&'static str, &'static str); 2] {
        [(PRIMARY_CSS_VAR, self.name.primary()), (ACCENT_CSS_VAR, self.name.accent())]
    }
}
