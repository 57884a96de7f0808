#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn reads_are_empty_outside_browser() {
    assert_eq!(current_hash(), "");
    assert_eq!(origin(), "");
    assert!(!confirm("Delete?"));
}

#[test]
fn writes_are_noops_but_callable() {
    navigate(AppRoute::Login);
    replace_route(AppRoute::Login);
    replace_hash_silently("#/");
    set_href("/#/?logout=true&from=frontend");
}
