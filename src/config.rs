//! Host configuration loaded from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, thiserror::Error)]
pub enum HostConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("bundle directory {0} does not contain index.html")]
    MissingIndex(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Compiled bundle: `index.html`, the wasm module, and assets.
    pub dist_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, dist_dir: PathBuf::from(DEFAULT_DIST_DIR) }
    }
}

impl HostConfig {
    /// Read `PORT` and `RETINASCAN_DIST_DIR`. Unset values use the defaults.
    ///
    /// # Errors
    ///
    /// [`HostConfigError::InvalidPort`] when `PORT` is not a `u16`.
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_values(std::env::var("PORT").ok(), std::env::var("RETINASCAN_DIST_DIR").ok())
    }

    /// # Errors
    ///
    /// [`HostConfigError::InvalidPort`] when `port` is not a `u16`.
    pub fn from_values(port: Option<String>, dist_dir: Option<String>) -> Result<Self, HostConfigError> {
        let port = match port.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| HostConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let dist_dir = dist_dir
            .filter(|d| !d.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DIST_DIR), PathBuf::from);
        Ok(Self { port, dist_dir })
    }

    #[must_use]
    pub fn index_html(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// # Errors
    ///
    /// [`HostConfigError::MissingIndex`] when the bundle has not been built.
    pub fn check_bundle(&self) -> Result<(), HostConfigError> {
        if self.index_html().is_file() {
            Ok(())
        } else {
            Err(HostConfigError::MissingIndex(self.dist_dir.clone()))
        }
    }
}
