//! Networking: the `gloo-net` transport and page-facing REST helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts `fetch` to the `retina` transport seam; `api` binds
//! that transport and the browser session to the `retina` clients.

pub mod api;
pub mod transport;
