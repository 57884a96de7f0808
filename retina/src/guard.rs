//! Session guard for the protected analysis route.
//!
//! STATE MACHINE
//! =============
//! `Verifying -> {Authenticated, Unauthenticated}`, terminal for one mounted
//! guard and re-run on remount.
//!
//! 1. No persisted token: `Unauthenticated` with zero requests.
//! 2. Otherwise try each [`VerificationProbe`] in order with the token as a
//!    bearer credential; the first 2xx wins.
//! 3. All probes failed: evict the token, `Unauthenticated`.
//!
//! The probe list is a compatibility shim for servers that expose
//! verification under different routes. The security properties are only
//! "no token, no access" and "server-rejected token, no access".

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::auth::{AuthClient, PROFILE_PATH, UserProfile};
use crate::config::AppConfig;
use crate::http::{ApiRequest, ApiResponse, Transport};
use crate::storage::SessionVault;

pub const VERIFY_PATH: &str = "/api/auth/verify";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Verifying,
    Authenticated,
    Unauthenticated,
}

/// What the guarded route renders for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Neutral loading indicator; nothing protected, no redirect.
    Loading,
    Content,
    /// Navigate to `/login`; `replace` keeps the guarded page out of history.
    RedirectToLogin { replace: bool },
}

impl GuardState {
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Verifying)
    }

    #[must_use]
    pub fn view(self) -> GuardView {
        match self {
            Self::Verifying => GuardView::Loading,
            Self::Authenticated => GuardView::Content,
            Self::Unauthenticated => GuardView::RedirectToLogin { replace: true },
        }
    }
}

/// A read-only endpoint used solely to test whether a token is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationProbe {
    pub path: String,
}

impl VerificationProbe {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Profile endpoint first, dedicated verify endpoint as fallback.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::new(PROFILE_PATH), Self::new(VERIFY_PATH)]
    }
}

/// Resolve the guard for the currently persisted token.
pub async fn verify_session<T: Transport + ?Sized>(
    vault: &SessionVault,
    transport: &T,
    config: &AppConfig,
) -> GuardState {
    let Some(token) = vault.token() else {
        log::debug!("no stored token; guard resolves unauthenticated");
        return GuardState::Unauthenticated;
    };

    for probe in &config.verification_probes {
        let request = ApiRequest::get(config.endpoint(&probe.path)).with_bearer(&token);
        match transport.send(request).await.and_then(ApiResponse::into_result) {
            Ok(_) => {
                log::info!("session verified via {}", probe.path);
                return GuardState::Authenticated;
            }
            Err(e) => log::warn!("session verification via {} failed: {e}", probe.path),
        }
    }

    log::warn!("all verification probes rejected the token; evicting");
    vault.evict_token();
    GuardState::Unauthenticated
}

/// Navigation-bar session check: fetch the profile for display. Any failure
/// is treated as a dead session and clears everything.
pub async fn load_profile<T: Transport + ?Sized>(
    vault: &SessionVault,
    transport: &T,
    config: &AppConfig,
) -> Option<UserProfile> {
    let token = vault.token()?;
    match AuthClient::new(config, transport).fetch_profile(&token).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("profile check failed: {e}");
            vault.clear_all();
            None
        }
    }
}

/// Shared flag a view flips on unmount so late async results are dropped.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn mark_dead(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
