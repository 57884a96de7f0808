//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navbar, footer, toast) and the session
//! guard, reading and writing shared state from Leptos context providers.

pub mod footer;
pub mod navbar;
pub mod protected_route;
pub mod toast;
