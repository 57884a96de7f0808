use super::*;

#[test]
fn expired_cookie_targets_root_path_in_the_past() {
    assert_eq!(expired_cookie("auth"), "auth=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;");
}

#[cfg(not(feature = "csr"))]
#[test]
fn vault_falls_back_to_memory_outside_browser() {
    let vault = vault();
    assert_eq!(vault.token(), None);
    vault.persist_login("abc.def.ghi", None);
    assert_eq!(vault.token().as_deref(), Some("abc.def.ghi"));
}
