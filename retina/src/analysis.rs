//! Retinal image analysis API: upload, history, delete.
//!
//! Every call carries the session token as a bearer credential. A 401 from
//! any of them means the token is dead: the caller evicts it with
//! [`evict_on_unauthorized`] and routes to `/login`.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::http::{ApiRequest, Transport};
use crate::storage::SessionVault;
use crate::upload::SelectedImage;

pub const HISTORY_PATH: &str = "/api/analysis/history";
pub const UPLOAD_PATH: &str = "/api/analysis/upload";
pub const ANALYSIS_PATH: &str = "/api/analysis";

pub const UPLOAD_FAILED_MESSAGE: &str = "Something went wrong while uploading the file.";
const NO_PREDICTION: &str = "upload response has no prediction";

/// Diabetic retinopathy grade as labelled by the model service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
    Proliferative,
    Other(String),
}

impl Severity {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::None => "Tidak ada",
            Self::Mild => "Ringan",
            Self::Moderate => "Sedang",
            Self::Severe => "Parah",
            Self::Proliferative => "Proliferatif",
            Self::Other(label) => label,
        }
    }

    /// Badge color. Unknown grades use the theme's primary color instead.
    #[must_use]
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::None => Some("#4caf50"),
            Self::Mild => Some("#8bc34a"),
            Self::Moderate => Some("#ff9800"),
            Self::Severe => Some("#f44336"),
            Self::Proliferative => Some("#9c27b0"),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Tidak ada" => Self::None,
            "Ringan" => Self::Mild,
            "Sedang" => Self::Moderate,
            "Parah" => Self::Severe,
            "Proliferatif" => Self::Proliferative,
            _ => Self::Other(label),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub severity: Severity,
    /// Model confidence in `0.0..=1.0`.
    pub confidence: f64,
}

impl Prediction {
    /// `0.875` renders as `"87.5"`.
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        confidence_percent(self.confidence)
    }
}

#[must_use]
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.1}", confidence * 100.0)
}

/// One entry of the signed-in user's analysis history.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub severity: Severity,
    /// Numeric grade; some deployments send it as a string.
    #[serde(default)]
    pub severity_level: Value,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AnalysisRecord {
    #[must_use]
    pub fn severity_level_label(&self) -> String {
        match &self.severity_level {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    #[must_use]
    pub fn confidence_percent(&self) -> String {
        confidence_percent(self.confidence)
    }

    /// `dd/MM/yyyy HH:mm` in the timestamp's own offset. Unparseable
    /// values are shown as sent.
    #[must_use]
    pub fn created_at_display(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };
        let format = format_description!("[day]/[month]/[year] [hour]:[minute]");
        OffsetDateTime::parse(raw, &Rfc3339)
            .ok()
            .and_then(|at| at.format(&format).ok())
            .unwrap_or_else(|| raw.to_owned())
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    prediction: Option<Prediction>,
}

/// History refetched after a write. A failure here does not undo the write.
pub type HistoryRefresh = Result<Vec<AnalysisRecord>, ApiError>;

/// A finished upload together with the history refetch that followed it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOutcome {
    pub prediction: Prediction,
    pub history: HistoryRefresh,
}

pub struct AnalysisClient<'a, T: Transport + ?Sized> {
    config: &'a AppConfig,
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> AnalysisClient<'a, T> {
    #[must_use]
    pub fn new(config: &'a AppConfig, transport: &'a T) -> Self {
        Self { config, transport }
    }

    /// `GET /api/analysis/history`.
    ///
    /// # Errors
    ///
    /// Transport, server and decode errors.
    pub async fn history(&self, token: &str) -> Result<Vec<AnalysisRecord>, ApiError> {
        self.transport
            .send(ApiRequest::get(self.config.endpoint(HISTORY_PATH)).with_bearer(token))
            .await?
            .into_result()?
            .json()
    }

    /// `POST /api/analysis/upload` as multipart with field `image`.
    ///
    /// # Errors
    ///
    /// Transport and server errors, or [`ApiError::MalformedResponse`] when
    /// the response carries no prediction.
    pub async fn upload(&self, token: &str, image: &SelectedImage) -> Result<Prediction, ApiError> {
        log::info!("uploading {} ({} bytes)", image.name, image.size);
        let response: UploadResponse = self
            .transport
            .send(ApiRequest::post_multipart(self.config.endpoint(UPLOAD_PATH), image.to_multipart()).with_bearer(token))
            .await?
            .into_result()?
            .json()?;
        response.prediction.ok_or(ApiError::MalformedResponse(NO_PREDICTION))
    }

    /// Upload, then refetch the history so the new record shows up. The
    /// prediction is kept even when the refetch fails.
    ///
    /// # Errors
    ///
    /// Only upload failures; refetch failures land in [`ScanOutcome::history`].
    pub async fn upload_and_refresh(&self, token: &str, image: &SelectedImage) -> Result<ScanOutcome, ApiError> {
        let prediction = self.upload(token, image).await?;
        let history = self.history(token).await;
        if let Err(e) = &history {
            log::warn!("upload stored but history refetch failed: {e}");
        }
        Ok(ScanOutcome { prediction, history })
    }

    /// `DELETE /api/analysis/{id}`.
    ///
    /// # Errors
    ///
    /// Transport and server errors.
    pub async fn delete(&self, token: &str, id: &str) -> Result<(), ApiError> {
        log::info!("deleting analysis {id}");
        let url = format!("{}/{}", self.config.endpoint(ANALYSIS_PATH), encode_segment(id));
        self.transport
            .send(ApiRequest::delete(url).with_bearer(token))
            .await?
            .into_result()?;
        Ok(())
    }

    /// Delete, then refetch the history.
    ///
    /// # Errors
    ///
    /// Only delete failures; the outer `Ok` means the record is gone even
    /// if the inner refetch failed.
    pub async fn delete_and_refresh(&self, token: &str, id: &str) -> Result<HistoryRefresh, ApiError> {
        self.delete(token, id).await?;
        let history = self.history(token).await;
        if let Err(e) = &history {
            log::warn!("analysis {id} deleted but history refetch failed: {e}");
        }
        Ok(history)
    }
}

fn encode_segment(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes()).collect()
}

/// Evict the token when `error` is a 401. Returns whether it did, in which
/// case the caller must route to `/login`.
pub fn evict_on_unauthorized(vault: &SessionVault, error: &ApiError) -> bool {
    if error.is_unauthorized() {
        log::warn!("analysis request rejected with 401; evicting token");
        vault.evict_token();
        return true;
    }
    false
}
