use super::*;

#[test]
fn server_message_is_shown_verbatim() {
    let error = ApiError::Server { status: 401, message: Some("Invalid credentials".into()) };
    assert_eq!(login_error_message(&error), "Invalid credentials");
}

#[test]
fn missing_server_message_falls_back_to_generic_text() {
    let error = ApiError::Server { status: 500, message: None };
    assert_eq!(login_error_message(&error), forms::LOGIN_FAILED_MESSAGE);
}

#[test]
fn tokenless_success_uses_fallback() {
    let error = ApiError::MalformedResponse("no token");
    assert_eq!(login_error_message(&error), forms::LOGIN_FAILED_MESSAGE);
}
