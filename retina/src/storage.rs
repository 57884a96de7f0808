//! Client-side persistence seams and the session vault.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the bearer token, an optional cached user blob, and the
//! theme preference under fixed `localStorage` keys. Access is synchronous and
//! single-writer per tab; no cross-tab coordination is attempted.
//!
//! [`SessionVault`] is the only code that touches the token and user keys.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::auth::UserProfile;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const THEME_NAME_KEY: &str = "themeName";
pub const THEME_MODE_KEY: &str = "theme";
pub const AUTH_COOKIE: &str = "auth";

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// Best-effort cookie access; only expiry is needed.
pub trait CookieJar {
    fn expire(&self, name: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[derive(Debug, Default)]
pub struct MemoryCookies {
    live: RefCell<BTreeSet<String>>,
}

impl MemoryCookies {
    pub fn set(&self, name: &str) {
        self.live.borrow_mut().insert(name.to_owned());
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.live.borrow().contains(name)
    }
}

impl CookieJar for MemoryCookies {
    fn expire(&self, name: &str) {
        self.live.borrow_mut().remove(name);
    }
}

/// The three browser persistence surfaces the session touches.
#[derive(Clone)]
pub struct BrowserStores {
    pub local: Rc<dyn KeyValueStore>,
    pub session: Rc<dyn KeyValueStore>,
    pub cookies: Rc<dyn CookieJar>,
}

impl BrowserStores {
    #[must_use]
    pub fn new(local: Rc<dyn KeyValueStore>, session: Rc<dyn KeyValueStore>, cookies: Rc<dyn CookieJar>) -> Self {
        Self { local, session, cookies }
    }

    /// Fresh, empty in-memory stores. Used off-browser.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()), Rc::new(MemoryStore::new()), Rc::new(MemoryCookies::default()))
    }
}

/// Owns reads and writes of the persisted session.
#[derive(Clone)]
pub struct SessionVault {
    stores: BrowserStores,
}

impl SessionVault {
    #[must_use]
    pub fn new(stores: BrowserStores) -> Self {
        Self { stores }
    }

    #[must_use]
    pub fn stores(&self) -> &BrowserStores {
        &self.stores
    }

    /// The persisted bearer token. Blank values count as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.stores.local.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }

    /// Best-effort cached copy of the user returned at login.
    #[must_use]
    pub fn cached_user(&self) -> Option<UserProfile> {
        let raw = self.stores.local.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist a freshly issued token and, when present, the user blob.
    pub fn persist_login(&self, token: &str, user: Option<&UserProfile>) {
        self.stores.local.set(TOKEN_KEY, token);
        if let Some(user) = user {
            match serde_json::to_string(user) {
                Ok(raw) => self.stores.local.set(USER_KEY, &raw),
                Err(e) => log::warn!("skipping user cache: {e}"),
            }
        }
    }

    /// Drop the token after the server rejected it.
    pub fn evict_token(&self) {
        self.stores.local.remove(TOKEN_KEY);
    }

    /// Remove every trace of the session: token, cached user, all
    /// session-scoped storage, and the auth cookie. Safe to repeat.
    pub fn clear_all(&self) {
        if self.stores.local.get(TOKEN_KEY).is_some() {
            log::info!("removing stored token");
        }
        self.stores.local.remove(TOKEN_KEY);
        self.stores.local.remove(USER_KEY);
        self.stores.session.clear();
        self.stores.cookies.expire(AUTH_COOKIE);
    }
}
