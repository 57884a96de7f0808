//! REST client for the four account operations plus the profile fetch.
//!
//! TRUST BOUNDARY
//! ==============
//! Login responses are never assumed to be well formed: a body without a
//! string `token` of at least [`MIN_TOKEN_LEN`] characters is rejected with
//! [`ApiError::MalformedResponse`]. The client never writes storage; callers
//! persist the token only after `login` returns `Ok`.
//!
//! Every operation issues exactly one request and propagates transport and
//! HTTP failures unchanged.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::http::{ApiRequest, Transport};

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const FORGOT_PASSWORD_PATH: &str = "/api/auth/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password";
pub const PROFILE_PATH: &str = "/api/user/profile";

/// Shortest token accepted from a login response.
pub const MIN_TOKEN_LEN: usize = 10;

const NO_DATA: &str = "no data in server response";
const MISSING_TOKEN: &str = "token missing from server response";
const INVALID_TOKEN: &str = "token in server response has an invalid format";

pub const FORGOT_PASSWORD_DEFAULT_MESSAGE: &str =
    "If the address is registered, a reset code has been sent to your email.";
pub const RESET_PASSWORD_DEFAULT_MESSAGE: &str = "Your password has been reset.";

/// Display-only user profile. Every field is optional; the server owns the shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    /// Name for the navigation bar; `"User"` when the server sent none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or("User")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: Option<UserProfile>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Default, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Borrowing client over any [`Transport`].
pub struct AuthClient<'a, T: Transport + ?Sized> {
    config: &'a AppConfig,
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> AuthClient<'a, T> {
    #[must_use]
    pub fn new(config: &'a AppConfig, transport: &'a T) -> Self {
        Self { config, transport }
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors; the server message is kept.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<RegisterResponse, ApiError> {
        log::info!("register request for {email}");
        let body = json!({ "name": name, "email": email, "password": password });
        let response = self
            .transport
            .send(ApiRequest::post_json(self.config.endpoint(REGISTER_PATH), body))
            .await?
            .into_result()?;
        // Some deployments answer 201 with an empty body.
        if response.body.trim().is_empty() {
            return Ok(RegisterResponse::default());
        }
        response.json()
    }

    /// `POST /api/auth/login`. Returns the validated token and optional user.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors, and returns
    /// [`ApiError::MalformedResponse`] when the response lacks a usable token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        log::info!("login request for {email} (password redacted)");
        let body = json!({ "email": email, "password": password });
        let response = self
            .transport
            .send(ApiRequest::post_json(self.config.endpoint(LOGIN_PATH), body))
            .await?
            .into_result()?;
        parse_login_response(&response.body)
    }

    /// `POST /api/auth/forgot-password`. Returns the server's message as-is;
    /// the response never reveals whether the address exists.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors.
    pub async fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let response = self
            .transport
            .send(ApiRequest::post_json(
                self.config.endpoint(FORGOT_PASSWORD_PATH),
                json!({ "email": email }),
            ))
            .await?
            .into_result()?;
        Ok(message_or(&response.body, FORGOT_PASSWORD_DEFAULT_MESSAGE))
    }

    /// `POST /api/auth/reset-password` with `{resetCode, password}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors; the server message is kept.
    pub async fn reset_password(&self, reset_code: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .transport
            .send(ApiRequest::post_json(
                self.config.endpoint(RESET_PASSWORD_PATH),
                json!({ "resetCode": reset_code, "password": password }),
            ))
            .await?
            .into_result()?;
        Ok(message_or(&response.body, RESET_PASSWORD_DEFAULT_MESSAGE))
    }

    /// `GET /api/user/profile` with the bearer token.
    ///
    /// # Errors
    ///
    /// Propagates transport and server errors, or [`ApiError::Decode`].
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.transport
            .send(ApiRequest::get(self.config.endpoint(PROFILE_PATH)).with_bearer(token))
            .await?
            .into_result()?
            .json()
    }
}

fn parse_login_response(body: &str) -> Result<LoginResponse, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|_| ApiError::MalformedResponse(NO_DATA))?;
    let Some(fields) = value.as_object() else {
        return Err(ApiError::MalformedResponse(NO_DATA));
    };
    let token = match fields.get("token") {
        None | Some(Value::Null) => {
            log::error!("login response has no token");
            return Err(ApiError::MalformedResponse(MISSING_TOKEN));
        }
        Some(Value::String(token)) if is_usable_token(token) => token.clone(),
        Some(_) => {
            log::error!("login response token has an invalid format");
            return Err(ApiError::MalformedResponse(INVALID_TOKEN));
        }
    };
    let user = fields
        .get("user")
        .filter(|u| u.is_object())
        .and_then(|u| serde_json::from_value(u.clone()).ok());
    Ok(LoginResponse { token, user })
}

fn is_usable_token(token: &str) -> bool {
    !token.trim().is_empty() && token.chars().count() >= MIN_TOKEN_LEN
}

fn message_or(body: &str, fallback: &str) -> String {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|m| m.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
