//! Static host for the RetinaScan browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SPA routes in the URL fragment, so the host only needs to serve the
//! compiled `dist/` directory and fall back to `index.html` for any path it
//! does not know. All API traffic goes from the browser straight to the
//! analysis backend.

pub mod config;
pub mod routes;
