use super::*;

#[test]
fn from_hash_matches_every_route() {
    let cases = [
        ("", AppRoute::Landing),
        ("#/", AppRoute::Landing),
        ("#/login", AppRoute::Login),
        ("#/register/", AppRoute::Register),
        ("#/forgot-password", AppRoute::ForgotPassword),
        ("#/reset-password", AppRoute::ResetPassword),
        ("#/retina-scan", AppRoute::RetinaScan),
        ("#/settings", AppRoute::NotFound),
    ];
    for (hash, route) in cases {
        assert_eq!(AppRoute::from_hash(hash), route, "{hash:?}");
    }
}

#[test]
fn from_hash_ignores_fragment_params() {
    assert_eq!(AppRoute::from_hash("#/?logout=true&from=dashboard"), AppRoute::Landing);
    assert_eq!(AppRoute::from_hash("#/login?auth=failed&from=dashboard"), AppRoute::Login);
}

#[test]
fn hash_round_trips_for_real_routes() {
    for route in [
        AppRoute::Landing,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::ForgotPassword,
        AppRoute::ResetPassword,
        AppRoute::RetinaScan,
    ] {
        assert_eq!(AppRoute::from_hash(&route.hash()), route);
    }
}

#[test]
fn chrome_hidden_only_on_auth_pages() {
    assert!(AppRoute::Landing.shows_chrome());
    assert!(AppRoute::RetinaScan.shows_chrome());
    assert!(!AppRoute::Login.shows_chrome());
    assert!(!AppRoute::ResetPassword.shows_chrome());
}

#[test]
fn only_retina_scan_is_protected() {
    assert!(AppRoute::RetinaScan.is_protected());
    assert!(!AppRoute::Landing.is_protected());
    assert!(!AppRoute::Login.is_protected());
}
