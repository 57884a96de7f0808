//! Application configuration: remote API base URL, dashboard origin, and the
//! session verification probe list.
//!
//! Native callers read `RETINA_*` environment variables at runtime; the
//! browser bundle bakes the same keys in at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::guard::VerificationProbe;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_DASHBOARD_URL: &str = "http://localhost:3000";
pub const DEFAULT_APP_NAME: &str = "frontend";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 500;

pub const API_URL_KEY: &str = "RETINA_API_URL";
pub const DASHBOARD_URL_KEY: &str = "RETINA_DASHBOARD_URL";
pub const REQUEST_TIMEOUT_KEY: &str = "RETINA_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("invalid {key}: expected whole seconds, got {value:?}")]
    InvalidTimeout { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote REST API origin, without trailing slash.
    pub api_url: String,
    /// Post-login dashboard origin, without trailing slash.
    pub dashboard_url: String,
    /// Value sent as `from=` when this app initiates a logout.
    pub app_name: String,
    /// Session verification endpoints, tried in order.
    pub verification_probes: Vec<VerificationProbe>,
    /// Pause between storing the token and leaving for the dashboard.
    pub redirect_delay: Duration,
    /// Per-request timeout. `None` leaves it to the HTTP stack.
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            dashboard_url: DEFAULT_DASHBOARD_URL.to_owned(),
            app_name: DEFAULT_APP_NAME.to_owned(),
            verification_probes: VerificationProbe::defaults(),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// Build a config with explicit origins and default everything else.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if either URL is not absolute http(s).
    pub fn from_values(api_url: &str, dashboard_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: normalize_url(API_URL_KEY, api_url)?,
            dashboard_url: normalize_url(DASHBOARD_URL_KEY, dashboard_url)?,
            ..Self::default()
        })
    }

    /// Build typed config from runtime environment variables.
    ///
    /// Optional:
    /// - `RETINA_API_URL`: default `http://localhost:5000`
    /// - `RETINA_DASHBOARD_URL`: default `http://localhost:3000`
    /// - `RETINA_REQUEST_TIMEOUT_SECS`: unset or `0` means no timeout
    ///
    /// # Errors
    ///
    /// Returns an error if a URL or the timeout cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from values captured at compile time. Used by the browser
    /// bundle, which has no process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a baked-in URL or timeout cannot be parsed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_URL_KEY => option_env!("RETINA_API_URL"),
                DASHBOARD_URL_KEY => option_env!("RETINA_DASHBOARD_URL"),
                REQUEST_TIMEOUT_KEY => option_env!("RETINA_REQUEST_TIMEOUT_SECS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = non_empty(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let dashboard_url = non_empty(DASHBOARD_URL_KEY).unwrap_or_else(|| DEFAULT_DASHBOARD_URL.to_owned());
        let request_timeout = match non_empty(REQUEST_TIMEOUT_KEY) {
            None => None,
            Some(raw) => parse_timeout(&raw)?,
        };

        Ok(Self {
            api_url: normalize_url(API_URL_KEY, &api_url)?,
            dashboard_url: normalize_url(DASHBOARD_URL_KEY, &dashboard_url)?,
            request_timeout,
            ..Self::default()
        })
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_url)
        } else {
            format!("{}/{path}", self.api_url)
        }
    }

    /// Replace the verification probe list.
    #[must_use]
    pub fn with_probes(mut self, probes: Vec<VerificationProbe>) -> Self {
        self.verification_probes = probes;
        self
    }
}

fn normalize_url(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl { key, reason: e.to_string() })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl { key, reason: format!("unsupported scheme '{}'", parsed.scheme()) });
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout(raw: &str) -> Result<Option<Duration>, ConfigError> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidTimeout { key: REQUEST_TIMEOUT_KEY, value: raw.to_owned() })?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}
