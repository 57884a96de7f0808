//! Theme initialization, persistence, and DOM application.
//!
//! Reads the preference from `localStorage` (falling back to the system
//! `prefers-color-scheme`), toggles the `dark` class on `<html>`, and sets
//! the color-theme custom properties on the root element.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; without `csr` reads
//! return the default preference and writes no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use retina::theme::ThemePreference;

#[cfg(feature = "csr")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Stored preference, or the system color scheme with the blue theme.
pub fn read_preference() -> ThemePreference {
    #[cfg(feature = "csr")]
    {
        let stores = crate::util::storage::browser_stores();
        ThemePreference::load(stores.local.as_ref(), system_prefers_dark())
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemePreference::default()
    }
}

/// Apply `dark` class and color variables on `<html>`.
pub fn apply(preference: &ThemePreference) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let _ = root.class_list().toggle_with_force("dark", preference.dark);
        if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
            let style = root.style();
            for (property, value) in preference.css_vars() {
                let _ = style.set_property(property, value);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = preference;
    }
}

/// Apply and persist.
pub fn commit(preference: &ThemePreference) {
    apply(preference);
    #[cfg(feature = "csr")]
    {
        let stores = crate::util::storage::browser_stores();
        preference.save(stores.local.as_ref());
    }
}
