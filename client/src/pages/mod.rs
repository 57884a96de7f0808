//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, requests,
//! redirects) and delegates shared chrome to `components`.

pub mod forgot_password;
pub mod landing;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod retina_scan;
