//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navbar (name, logout button) and the login page (already
//! signed in panel). The guard itself does not read this; it always
//! re-verifies against the API.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use retina::SessionVault;
use retina::auth::UserProfile;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// A token is persisted. Not proof that the server accepts it.
    pub has_session: bool,
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    /// Snapshot of what is persisted right now.
    #[must_use]
    pub fn from_vault(vault: &SessionVault) -> Self {
        let has_session = vault.token().is_some();
        let user = if has_session { vault.cached_user() } else { None };
        Self { has_session, user, loading: false }
    }

    pub fn signed_out(&mut self) {
        *self = Self::default();
    }

    pub fn set_profile(&mut self, profile: Option<UserProfile>) {
        self.loading = false;
        match profile {
            Some(profile) => self.user = Some(profile),
            // Profile failure clears the whole session.
            None => self.signed_out(),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("User", UserProfile::display_name)
    }
}
