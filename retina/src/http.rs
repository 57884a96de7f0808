//! Transport-neutral request/response types and the [`Transport`] seam.
//!
//! DESIGN
//! ======
//! A `Transport` only moves bytes: a non-2xx status comes back as an
//! `ApiResponse`, never as an error. Status interpretation happens once, in
//! [`ApiResponse::into_result`], so every client shares the same mapping from
//! error bodies to [`ApiError::Server`]. No transport retries.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A single file sent as one field of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    pub field: String,
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(MultipartFile),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), bearer: None, body: RequestBody::Empty }
    }

    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self { method: Method::Delete, url: url.into(), bearer: None, body: RequestBody::Empty }
    }

    #[must_use]
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, url: url.into(), bearer: None, body: RequestBody::Json(body) }
    }

    #[must_use]
    pub fn post_multipart(url: impl Into<String>, file: MultipartFile) -> Self {
        Self { method: Method::Post, url: url.into(), bearer: None, body: RequestBody::Multipart(file) }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    /// Value for the `Authorization` header, if a bearer token is attached.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Turn a non-2xx response into [`ApiError::Server`], carrying the
    /// `message` field of a JSON error body when present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] for any status outside `200..300`.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(ApiError::Server { status: self.status, message: error_body_message(&self.body) })
    }
}

fn error_body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message").and_then(Value::as_str).map(str::to_owned)
}

/// Moves one request to the remote API and returns the raw response.
///
/// Futures are not `Send`: browser transports hold JS handles.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the request could not be
    /// completed. HTTP error statuses are returned as `Ok`.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}
