//! Browser implementations of the `retina` storage seams.
//!
//! TRADE-OFFS
//! ==========
//! Stores are rebuilt on demand instead of living in context: `web_sys`
//! handles are not `Send`, and the lookup is cheap. Outside a browser, or
//! when storage is blocked, a fresh in-memory store keeps callers working.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use retina::storage::BrowserStores;
use retina::SessionVault;

/// `Set-Cookie` string that expires `name` on the root path.
#[cfg(any(test, feature = "csr"))]
fn expired_cookie(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;")
}

#[cfg(feature = "csr")]
mod web {
    use retina::storage::{CookieJar, KeyValueStore};

    pub struct WebStorage(pub web_sys::Storage);

    impl KeyValueStore for WebStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if self.0.set_item(key, value).is_err() {
                log::warn!("storage write for {key} was rejected");
            }
        }

        fn remove(&self, key: &str) {
            let _ = self.0.remove_item(key);
        }

        fn clear(&self) {
            let _ = self.0.clear();
        }
    }

    pub struct DocumentCookies(pub web_sys::HtmlDocument);

    impl CookieJar for DocumentCookies {
        fn expire(&self, name: &str) {
            let _ = self.0.set_cookie(&super::expired_cookie(name));
        }
    }
}

#[cfg(feature = "csr")]
fn web_stores() -> Option<BrowserStores> {
    use std::rc::Rc;
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let local = window.local_storage().ok().flatten()?;
    let session = window.session_storage().ok().flatten()?;
    let document = window.document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
    Some(BrowserStores::new(
        Rc::new(web::WebStorage(local)),
        Rc::new(web::WebStorage(session)),
        Rc::new(web::DocumentCookies(document)),
    ))
}

/// `localStorage`, `sessionStorage` and `document.cookie`, or in-memory
/// stand-ins when those are unavailable.
pub fn browser_stores() -> BrowserStores {
    #[cfg(feature = "csr")]
    {
        if let Some(stores) = web_stores() {
            return stores;
        }
        log::warn!("browser storage unavailable; session will not persist");
    }
    BrowserStores::in_memory()
}

pub fn vault() -> SessionVault {
    SessionVault::new(browser_stores())
}
