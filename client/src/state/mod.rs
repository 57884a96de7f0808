//! Reactive application state, provided as `RwSignal`s through context.
//!
//! DESIGN
//! ======
//! Each state type is a plain `Clone` struct with pure update methods so the
//! transitions are unit-testable without a browser; `app::App` wraps them in
//! signals.

pub mod auth;
pub mod notification;
pub mod router;
pub mod scan;
pub mod theme;
