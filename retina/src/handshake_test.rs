use super::*;
use crate::auth::UserProfile;
use crate::storage::{AUTH_COOKIE, KeyValueStore, TOKEN_KEY, USER_KEY};
use crate::testing::{ScriptedTransport, TestStores};
use serde_json::json;

fn config() -> AppConfig {
    AppConfig::from_values("http://api.test", "https://dashboard.retina.test").unwrap()
}

fn signed_in() -> TestStores {
    let stores = TestStores::new();
    stores.local.set(TOKEN_KEY, "abc.def.ghi");
    stores.local.set(USER_KEY, r#"{"name":"A"}"#);
    stores.session.set("scratch", "1");
    stores.cookies.set(AUTH_COOKIE);
    stores
}

// =============================================================
// process_fragment
// =============================================================

#[test]
fn logout_fragment_clears_session_and_strips_params() {
    let stores = signed_in();
    let outcome = process_fragment("#/?logout=true&from=dashboard", &stores.vault());

    assert_eq!(outcome.notification, Some(Notification::success(LOGOUT_DASHBOARD_SUCCESS)));
    assert_eq!(outcome.cleaned_hash.as_deref(), Some("#/"));
    assert!(outcome.forced_logout);
    assert_eq!(stores.local.get(TOKEN_KEY), None);
    assert_eq!(stores.local.get(USER_KEY), None);
    assert!(stores.session.is_empty());
    assert!(!stores.cookies.contains(AUTH_COOKIE));
}

#[test]
fn logout_fragment_is_safe_when_already_logged_out() {
    let stores = TestStores::new();
    let first = process_fragment("#/?logout=true&from=frontend", &stores.vault());
    let second = process_fragment("#/?logout=true&from=frontend", &stores.vault());
    assert_eq!(first, second);
    assert_eq!(first.notification, Some(Notification::success(LOGOUT_SUCCESS)));
    assert!(stores.local.is_empty());
}

#[test]
fn logout_fragment_with_error_flag_shows_error() {
    let stores = signed_in();
    let outcome = process_fragment("#/?logout=true&from=dashboard&error=true", &stores.vault());
    assert_eq!(outcome.notification, Some(Notification::error(LOGOUT_ERROR)));
}

#[test]
fn auth_failed_fragment_notifies_without_cleanup() {
    let stores = signed_in();
    let outcome = process_fragment("#/login?auth=failed&from=dashboard", &stores.vault());

    assert_eq!(outcome.notification, Some(Notification::error(SESSION_EXPIRED)));
    assert_eq!(outcome.cleaned_hash.as_deref(), Some("#/login"));
    assert!(!outcome.forced_logout);
    assert_eq!(stores.local.get(TOKEN_KEY).as_deref(), Some("abc.def.ghi"));
}

#[test]
fn unrelated_fragment_is_no_signal() {
    let stores = signed_in();
    for hash in ["", "#/", "#/?foo=bar", "#/?logout=yes", "#/?%%%"] {
        assert_eq!(process_fragment(hash, &stores.vault()), FragmentOutcome::default(), "{hash:?}");
    }
    assert_eq!(stores.local.get(TOKEN_KEY).as_deref(), Some("abc.def.ghi"));
}

// =============================================================
// logout / URLs
// =============================================================

#[test]
fn logout_clears_and_targets_marketing_root() {
    let stores = signed_in();
    let url = logout(&stores.vault(), &config());
    assert_eq!(url, "/#/?logout=true&from=frontend");
    assert_eq!(stores.local.get(TOKEN_KEY), None);
}

#[test]
fn logout_twice_leaves_storage_empty_both_times() {
    let stores = signed_in();
    let vault = stores.vault();
    logout(&vault, &config());
    assert!(stores.local.is_empty());
    logout(&vault, &config());
    assert!(stores.local.is_empty());
    assert!(stores.session.is_empty());
}

#[test]
fn dashboard_handoff_embeds_token_in_fragment() {
    assert_eq!(
        dashboard_handoff_url(&config(), "abc.def.ghi"),
        "https://dashboard.retina.test/#/?token=abc.def.ghi"
    );
}

#[test]
fn dashboard_handoff_encodes_reserved_characters() {
    assert_eq!(
        dashboard_handoff_url(&config(), "a+b/c=&d"),
        "https://dashboard.retina.test/#/?token=a%2Bb%2Fc%3D%26d"
    );
}

#[test]
fn auth_failed_url_targets_marketing_root() {
    assert_eq!(
        auth_failed_url("https://retinascan.test/"),
        "https://retinascan.test/#/?auth=failed&from=dashboard"
    );
}

// =============================================================
// login handoff
// =============================================================

#[tokio::test]
async fn login_and_handoff_persists_token_and_builds_redirect() {
    let stores = TestStores::new();
    let transport = ScriptedTransport::new();
    transport.push_json(200, &json!({ "token": "abc.def.ghi", "user": { "name": "A" } }));

    let handoff = login_and_handoff(&stores.vault(), &transport, &config(), "a@b.com", "secret123")
        .await
        .unwrap();

    assert_eq!(stores.local.get(TOKEN_KEY).as_deref(), Some("abc.def.ghi"));
    assert_eq!(
        stores.vault().cached_user(),
        Some(UserProfile { name: Some("A".to_owned()), ..UserProfile::default() })
    );
    assert_eq!(handoff.url, "https://dashboard.retina.test/#/?token=abc.def.ghi");
    assert_eq!(handoff.delay, Duration::from_millis(500));
}

#[tokio::test]
async fn login_without_token_writes_nothing() {
    let stores = TestStores::new();
    let transport = ScriptedTransport::new();
    transport.push_json(200, &json!({ "user": { "name": "A" } }));

    let err = login_and_handoff(&stores.vault(), &transport, &config(), "a@b.com", "secret123")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse(_)));
    assert!(stores.local.is_empty());
}

#[tokio::test]
async fn rejected_login_writes_nothing() {
    let stores = TestStores::new();
    let transport = ScriptedTransport::new();
    transport.push_json(401, &json!({ "message": "Invalid credentials" }));

    assert!(login_and_handoff(&stores.vault(), &transport, &config(), "a@b.com", "bad").await.is_err());
    assert!(stores.local.is_empty());
}
