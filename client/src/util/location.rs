//! `window.location` / `history` helpers for the hash router.
//!
//! Requires a browser environment; without `csr` every call is a no-op
//! and reads return empty values.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use retina::routes::AppRoute;

/// Current `location.hash`, including the leading `#`.
pub fn current_hash() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Push a new history entry for `route`.
pub fn navigate(route: AppRoute) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.hash());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = route;
    }
}

/// Replace the current history entry with `route`. Fires `hashchange`.
pub fn replace_route(route: AppRoute) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace(&route.hash());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = route;
    }
}

/// Rewrite the fragment without a history entry or a `hashchange` event.
pub fn replace_hash_silently(hash: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = hash;
    }
}

/// Full-page navigation.
pub fn set_href(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// `scheme://host[:port]` of the running page.
pub fn origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Blocking `window.confirm`. Outside a browser nothing is confirmed.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
