use super::*;
use crate::testing::TestStores;

fn alice() -> UserProfile {
    UserProfile { id: Some("u1".to_owned()), name: Some("Alice".to_owned()), email: Some("a@b.com".to_owned()) }
}

#[test]
fn token_absent_when_missing_or_blank() {
    let stores = TestStores::new();
    let vault = stores.vault();
    assert_eq!(vault.token(), None);

    stores.local.set(TOKEN_KEY, "   ");
    assert_eq!(vault.token(), None);
}

#[test]
fn persist_login_writes_token_and_user() {
    let stores = TestStores::new();
    let vault = stores.vault();
    vault.persist_login("abc.def.ghi", Some(&alice()));

    assert_eq!(stores.local.get(TOKEN_KEY).as_deref(), Some("abc.def.ghi"));
    assert_eq!(vault.cached_user(), Some(alice()));
}

#[test]
fn persist_login_without_user_leaves_user_key_unset() {
    let stores = TestStores::new();
    stores.vault().persist_login("abc.def.ghi", None);
    assert_eq!(stores.local.get(USER_KEY), None);
}

#[test]
fn cached_user_ignores_corrupt_blob() {
    let stores = TestStores::new();
    stores.local.set(USER_KEY, "{not json");
    assert_eq!(stores.vault().cached_user(), None);
}

#[test]
fn evict_token_keeps_theme_and_user() {
    let stores = TestStores::new();
    let vault = stores.vault();
    vault.persist_login("abc.def.ghi", Some(&alice()));
    stores.local.set(THEME_NAME_KEY, "green");

    vault.evict_token();

    assert_eq!(vault.token(), None);
    assert!(stores.local.get(USER_KEY).is_some());
    assert_eq!(stores.local.get(THEME_NAME_KEY).as_deref(), Some("green"));
}

#[test]
fn clear_all_is_idempotent() {
    let stores = TestStores::new();
    let vault = stores.vault();
    vault.persist_login("abc.def.ghi", Some(&alice()));
    stores.session.set("draft", "x");
    stores.cookies.set(AUTH_COOKIE);

    vault.clear_all();
    assert_eq!(stores.local.get(TOKEN_KEY), None);
    assert_eq!(stores.local.get(USER_KEY), None);
    assert!(stores.session.is_empty());
    assert!(!stores.cookies.contains(AUTH_COOKIE));

    vault.clear_all();
    assert_eq!(stores.local.get(TOKEN_KEY), None);
    assert!(stores.session.is_empty());
}

#[test]
fn clear_all_preserves_theme_preference() {
    let stores = TestStores::new();
    stores.local.set(THEME_MODE_KEY, "dark");
    stores.vault().clear_all();
    assert_eq!(stores.local.get(THEME_MODE_KEY).as_deref(), Some("dark"));
}
