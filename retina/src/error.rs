//! Error taxonomy for remote calls and client-side input validation.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures fall into three buckets: the request never completed
//! (`Transport`), the server answered with a non-2xx status (`Server`), or the
//! server answered 2xx with a body we cannot trust (`MalformedResponse`,
//! `Decode`). Forms show the server's own message when one exists and a fixed
//! fallback otherwise; see [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when a request never reached the server.
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred. Please try again.";

/// Failure of a single remote API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("network request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },

    /// The server answered 2xx but the body is missing required data.
    #[error("malformed response: {0}")]
    MalformedResponse(&'static str),

    /// The body was not the JSON shape the caller expected.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for server errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the server rejected the bearer credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Server-provided human readable message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text to display in a form: the server message verbatim when present,
    /// a network notice for transport failures, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_owned();
        }
        match self {
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

/// Client-side input validation failure. Checked before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter your name.")]
    NameRequired,

    #[error("Enter your email address.")]
    EmailRequired,

    #[error("Enter your password.")]
    PasswordRequired,

    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },

    #[error("Verification code and new password are required.")]
    ResetFieldsRequired,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Only JPEG and PNG files are accepted.")]
    UnsupportedImageType(String),

    #[error("Maximum file size is 5 MB.")]
    ImageTooLarge { size: u64 },

    #[error("Please choose a file first.")]
    NoImageSelected,

    #[error("The selected file could not be read.")]
    UnreadableFile,
}
