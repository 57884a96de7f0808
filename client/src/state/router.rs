//! Current hash location.
//!
//! Updated from `hashchange`; every route and fragment signal is derived
//! from the raw hash so the navbar can react once per location change.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use retina::routes::AppRoute;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    pub hash: String,
}

impl RouterState {
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    #[must_use]
    pub fn route(&self) -> AppRoute {
        AppRoute::from_hash(&self.hash)
    }

    /// Returns whether the hash actually changed.
    pub fn set_hash(&mut self, hash: &str) -> bool {
        if self.hash == hash {
            return false;
        }
        hash.clone_into(&mut self.hash);
        true
    }
}
