//! Route table for the hash router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::fragment::HashLocation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AppRoute {
    #[default]
    Landing,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    RetinaScan,
    NotFound,
}

impl AppRoute {
    /// Match a route path. A trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            "/reset-password" => Self::ResetPassword,
            "/retina-scan" => Self::RetinaScan,
            _ => Self::NotFound,
        }
    }

    /// Route for a raw `location.hash`, ignoring fragment parameters.
    #[must_use]
    pub fn from_hash(hash: &str) -> Self {
        Self::from_path(HashLocation::parse(hash).path())
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing | Self::NotFound => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::RetinaScan => "/retina-scan",
        }
    }

    /// `#`-prefixed form for `href`s and `location.hash` assignment.
    #[must_use]
    pub fn hash(self) -> String {
        format!("#{}", self.path())
    }

    /// Navbar and footer are hidden on the auth pages.
    #[must_use]
    pub fn shows_chrome(self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::ForgotPassword | Self::ResetPassword)
    }

    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::RetinaScan)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "RetinaScan",
            Self::Login => "Log in | RetinaScan",
            Self::Register => "Register | RetinaScan",
            Self::ForgotPassword => "Forgot password | RetinaScan",
            Self::ResetPassword => "Reset password | RetinaScan",
            Self::RetinaScan => "Retina scan | RetinaScan",
            Self::NotFound => "Not found | RetinaScan",
        }
    }
}
