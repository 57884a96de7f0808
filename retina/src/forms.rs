//! Input checks run before any auth request leaves the page, plus the
//! fallback copy shown when a failure carries no server message.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::time::Duration;

use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect email or password. Please check your details and try again.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again later.";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Redirecting you to the login page.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const RESET_SUCCESS_MESSAGE: &str = "Your password has been reset!";
pub const AUTH_FAILED_BANNER: &str = "Login session failed. Please log in again.";

pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_secs(2);
pub const RESET_REDIRECT_DELAY: Duration = Duration::from_secs(3);

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_length(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

/// # Errors
///
/// Missing email or password.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if blank(email) {
        return Err(ValidationError::EmailRequired);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

/// # Errors
///
/// Missing name or email, or a password shorter than [`MIN_PASSWORD_LEN`].
pub fn validate_register(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if blank(name) {
        return Err(ValidationError::NameRequired);
    }
    if blank(email) {
        return Err(ValidationError::EmailRequired);
    }
    check_length(password)
}

/// # Errors
///
/// Missing email.
pub fn validate_forgot(email: &str) -> Result<(), ValidationError> {
    if blank(email) {
        return Err(ValidationError::EmailRequired);
    }
    Ok(())
}

/// # Errors
///
/// Missing code or password, short password, or mismatched confirmation,
/// checked in that order.
pub fn validate_reset(code: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    if blank(code) || password.is_empty() {
        return Err(ValidationError::ResetFieldsRequired);
    }
    check_length(password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Live hint under a password field. Empty input shows nothing.
#[must_use]
pub fn password_hint(password: &str) -> Option<ValidationError> {
    if password.is_empty() {
        return None;
    }
    check_length(password).err()
}

/// Live hint under a confirmation field. Empty input shows nothing.
#[must_use]
pub fn confirm_hint(password: &str, confirm: &str) -> Option<ValidationError> {
    (!confirm.is_empty() && password != confirm).then_some(ValidationError::PasswordMismatch)
}
