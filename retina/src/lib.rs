//! # retina
//!
//! Headless application core for the RetinaScan frontend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `client` crate renders pages and owns browser glue; everything with a
//! testable contract lives here instead: the REST auth client, the session
//! guard, the logout/login cross-application handshake, fragment parameter
//! parsing for the hash router, upload validation, theme preference, and the
//! route table.
//!
//! Network and storage access go through two seams, [`http::Transport`] and
//! [`storage::KeyValueStore`], so the same logic runs against `gloo-net` and
//! `localStorage` in the browser, `reqwest` natively, and scripted fakes in
//! tests.

pub mod analysis;
pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod fragment;
pub mod guard;
pub mod handshake;
pub mod http;
pub mod routes;
pub mod storage;
pub mod theme;
pub mod upload;

#[cfg(not(target_arch = "wasm32"))]
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::AppConfig;
pub use error::{ApiError, ValidationError};
pub use http::{ApiRequest, ApiResponse, Transport};
pub use storage::{BrowserStores, SessionVault};
