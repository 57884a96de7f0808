//! REST calls used by pages, wired to the browser session and transport.
//!
//! Each helper builds the vault and transport on demand and delegates to
//! the `retina` clients, so pages hold only the `AppConfig` from context.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics; every failure
//! becomes a visible message or a redirect, never a crashed view.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use retina::analysis::{AnalysisClient, AnalysisRecord, HistoryRefresh, ScanOutcome, evict_on_unauthorized};
use retina::auth::{AuthClient, RegisterResponse, UserProfile};
use retina::guard::GuardState;
use retina::handshake::Handoff;
use retina::upload::SelectedImage;
use retina::{ApiError, AppConfig};

use super::transport::GlooTransport;
use crate::util::storage;

/// Outcome of a token-bearing analysis call.
#[derive(Clone, Debug, PartialEq)]
pub enum Authorized<T> {
    Ok(T),
    Failed(ApiError),
    /// No token, or the server rejected it; the token is already evicted.
    SignedOut,
}

impl<T> Authorized<T> {
    fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) if evict_on_unauthorized(&storage::vault(), &e) => Self::SignedOut,
            Err(e) => Self::Failed(e),
        }
    }
}

/// A 401 on the refetch after a successful write still evicts the token,
/// but the write's own result is kept for display.
fn evict_on_refresh(refresh: &HistoryRefresh) {
    if let Err(e) = refresh {
        evict_on_unauthorized(&storage::vault(), e);
    }
}

pub async fn verify_session(config: &AppConfig) -> GuardState {
    retina::guard::verify_session(&storage::vault(), &GlooTransport::new(config), config).await
}

/// Profile for the navbar. Failure clears the session.
pub async fn load_profile(config: &AppConfig) -> Option<UserProfile> {
    retina::guard::load_profile(&storage::vault(), &GlooTransport::new(config), config).await
}

/// # Errors
///
/// Login failures; nothing is persisted on error.
pub async fn login(config: &AppConfig, email: &str, password: &str) -> Result<Handoff, ApiError> {
    retina::handshake::login_and_handoff(&storage::vault(), &GlooTransport::new(config), config, email, password)
        .await
}

/// # Errors
///
/// Transport and server errors.
pub async fn register(config: &AppConfig, name: &str, email: &str, password: &str) -> Result<RegisterResponse, ApiError> {
    AuthClient::new(config, &GlooTransport::new(config)).register(name, email, password).await
}

/// # Errors
///
/// Transport and server errors.
pub async fn forgot_password(config: &AppConfig, email: &str) -> Result<String, ApiError> {
    AuthClient::new(config, &GlooTransport::new(config)).forgot_password(email).await
}

/// # Errors
///
/// Transport and server errors.
pub async fn reset_password(config: &AppConfig, code: &str, password: &str) -> Result<String, ApiError> {
    AuthClient::new(config, &GlooTransport::new(config)).reset_password(code, password).await
}

pub async fn history(config: &AppConfig) -> Authorized<Vec<AnalysisRecord>> {
    let Some(token) = storage::vault().token() else {
        return Authorized::SignedOut;
    };
    let transport = GlooTransport::new(config);
    Authorized::from_result(AnalysisClient::new(config, &transport).history(&token).await)
}

pub async fn upload(config: &AppConfig, image: &SelectedImage) -> Authorized<ScanOutcome> {
    let Some(token) = storage::vault().token() else {
        return Authorized::SignedOut;
    };
    let transport = GlooTransport::new(config);
    let result = AnalysisClient::new(config, &transport).upload_and_refresh(&token, image).await;
    if let Ok(outcome) = &result {
        evict_on_refresh(&outcome.history);
    }
    Authorized::from_result(result)
}

/// `Ok` means the record is gone; the inner result is the refetched list.
pub async fn delete(config: &AppConfig, id: &str) -> Authorized<HistoryRefresh> {
    let Some(token) = storage::vault().token() else {
        return Authorized::SignedOut;
    };
    let transport = GlooTransport::new(config);
    let result = AnalysisClient::new(config, &transport).delete_and_refresh(&token, id).await;
    if let Ok(refresh) = &result {
        evict_on_refresh(refresh);
    }
    Authorized::from_result(result)
}
