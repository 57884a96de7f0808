use super::*;
use serde_json::json;

#[test]
fn with_bearer_formats_authorization_header() {
    let req = ApiRequest::get("http://api.test/api/user/profile").with_bearer("abc.def.ghi");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.authorization().as_deref(), Some("Bearer abc.def.ghi"));
}

#[test]
fn requests_without_bearer_have_no_authorization() {
    let req = ApiRequest::post_json("http://api.test/api/auth/login", json!({ "email": "a@b.com" }));
    assert_eq!(req.authorization(), None);
    assert_eq!(req.method.as_str(), "POST");
}

#[test]
fn into_result_passes_2xx_through() {
    let resp = ApiResponse::new(201, "{}").into_result().unwrap();
    assert_eq!(resp.status, 201);
}

#[test]
fn into_result_extracts_server_message() {
    let err = ApiResponse::new(400, r#"{"message":"Email already registered"}"#)
        .into_result()
        .unwrap_err();
    assert_eq!(err, ApiError::Server { status: 400, message: Some("Email already registered".to_owned()) });
}

#[test]
fn into_result_tolerates_non_json_error_body() {
    let err = ApiResponse::new(502, "<html>Bad Gateway</html>").into_result().unwrap_err();
    assert_eq!(err, ApiError::Server { status: 502, message: None });
}

#[test]
fn json_decode_failure_is_decode_error() {
    let err = ApiResponse::new(200, "not json").json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
