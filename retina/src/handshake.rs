//! Logout and login handshakes between the marketing app and the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Marketing/auth pages and the post-login dashboard are separate origins.
//! They signal each other with fragment parameters:
//!
//! - login success: `<dashboard>/#/?token=<token>` (full-page redirect, one
//!   shot, no acknowledgement)
//! - logout: `/#/?logout=true&from=<app>` back on the marketing root
//! - dashboard rejected the token: `<marketing>/#/?auth=failed&from=dashboard`
//!
//! The token-in-URL handoff exposes the bearer token to browser history.
//! It is kept as-is pending a product decision on an exchange-code flow.

#[cfg(test)]
#[path = "handshake_test.rs"]
mod handshake_test;

use std::time::Duration;

use url::form_urlencoded::Serializer;

use crate::auth::{AuthClient, LoginResponse};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::fragment::{FragmentSignal, HashLocation, LogoutParams};
use crate::http::Transport;
use crate::storage::SessionVault;

pub const LOGOUT_SUCCESS: &str = "You have been logged out.";
pub const LOGOUT_DASHBOARD_SUCCESS: &str = "You have been logged out of the dashboard.";
pub const LOGOUT_ERROR: &str = "Something went wrong while logging out. Please try again.";
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient toast shown after a handshake signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

/// Result of inspecting the fragment on a location change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FragmentOutcome {
    pub notification: Option<Notification>,
    /// Replacement fragment for `history.replaceState`; `None` leaves the URL alone.
    pub cleaned_hash: Option<String>,
    /// The session was torn down and the UI must drop any signed-in state.
    pub forced_logout: bool,
}

#[must_use]
pub fn logout_message(params: &LogoutParams) -> Notification {
    if params.has_error {
        return Notification::error(LOGOUT_ERROR);
    }
    if params.from.as_deref() == Some("dashboard") {
        return Notification::success(LOGOUT_DASHBOARD_SUCCESS);
    }
    Notification::success(LOGOUT_SUCCESS)
}

/// Act on the fragment signal in `hash`. Runs once per location change.
///
/// - `logout=true`: clear the session (idempotent), notify, strip params.
/// - `auth=failed&from=dashboard`: session-expired notice, strip params,
///   storage untouched.
/// - anything else: nothing.
#[must_use]
pub fn process_fragment(hash: &str, vault: &SessionVault) -> FragmentOutcome {
    let location = HashLocation::parse(hash);
    match FragmentSignal::from_location(&location) {
        FragmentSignal::Logout(params) => {
            log::info!(
                "logout signal from={:?} error={} t={:?}",
                params.from,
                params.has_error,
                params.timestamp
            );
            vault.clear_all();
            FragmentOutcome {
                notification: Some(logout_message(&params)),
                cleaned_hash: Some(location.without_params()),
                forced_logout: true,
            }
        }
        FragmentSignal::AuthFailed => {
            log::info!("dashboard reported a failed session handoff");
            FragmentOutcome {
                notification: Some(Notification::error(SESSION_EXPIRED)),
                cleaned_hash: Some(location.without_params()),
                forced_logout: false,
            }
        }
        FragmentSignal::None => FragmentOutcome::default(),
    }
}

/// Tear down the local session and return the origin-relative URL that
/// announces the logout to the marketing root.
#[must_use]
pub fn logout(vault: &SessionVault, config: &AppConfig) -> String {
    vault.clear_all();
    let query = Serializer::new(String::new())
        .append_pair("logout", "true")
        .append_pair("from", &config.app_name)
        .finish();
    format!("/#/?{query}")
}

/// `<dashboard>/#/?token=<token>`.
#[must_use]
pub fn dashboard_handoff_url(config: &AppConfig, token: &str) -> String {
    let query = Serializer::new(String::new()).append_pair("token", token).finish();
    format!("{}/#/?{query}", config.dashboard_url)
}

/// `<marketing>/#/?auth=failed&from=dashboard`, the dashboard's return trip.
#[must_use]
pub fn auth_failed_url(marketing_origin: &str) -> String {
    format!("{}/#/?auth=failed&from=dashboard", marketing_origin.trim_end_matches('/'))
}

/// Where to go after login, and how long to wait first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handoff {
    pub url: String,
    pub delay: Duration,
}

/// Persist a validated login and build the dashboard redirect.
#[must_use]
pub fn complete_login(vault: &SessionVault, config: &AppConfig, response: &LoginResponse) -> Handoff {
    vault.persist_login(&response.token, response.user.as_ref());
    let url = dashboard_handoff_url(config, &response.token);
    log::info!("login complete; handing off to {}", config.dashboard_url);
    Handoff { url, delay: config.redirect_delay }
}

/// Log in and, only on success, persist the session and build the handoff.
///
/// # Errors
///
/// Propagates [`AuthClient::login`] errors; storage is untouched on error.
pub async fn login_and_handoff<T: Transport + ?Sized>(
    vault: &SessionVault,
    transport: &T,
    config: &AppConfig,
    email: &str,
    password: &str,
) -> Result<Handoff, ApiError> {
    let response = AuthClient::new(config, transport).login(email, password).await?;
    Ok(complete_login(vault, config, &response))
}
