use super::*;
use retina::auth::UserProfile;
use retina::handshake::{LOGOUT_SUCCESS, Notification};

fn signed_in() -> AuthState {
    AuthState {
        has_session: true,
        user: Some(UserProfile { name: Some("Ada".into()), ..UserProfile::default() }),
        loading: false,
    }
}

#[test]
fn forced_logout_drops_signed_in_state_and_shows_toast() {
    let mut auth = signed_in();
    let mut notifications = NotificationState::default();
    let outcome = FragmentOutcome {
        notification: Some(Notification::success(LOGOUT_SUCCESS)),
        cleaned_hash: Some("#/".into()),
        forced_logout: true,
    };

    let cleaned = apply_outcome(outcome, &mut auth, &mut notifications);

    assert_eq!(cleaned.as_deref(), Some("#/"));
    assert_eq!(auth, AuthState::default());
    assert_eq!(notifications.seq, 1);
    assert_eq!(notifications.current.map(|n| n.message), Some(LOGOUT_SUCCESS.to_owned()));
}

#[test]
fn auth_failure_notice_keeps_session() {
    let mut auth = signed_in();
    let mut notifications = NotificationState::default();
    let outcome = FragmentOutcome {
        notification: Some(Notification::error("Login session failed.")),
        cleaned_hash: Some("#/login".into()),
        forced_logout: false,
    };

    apply_outcome(outcome, &mut auth, &mut notifications);

    assert!(auth.has_session);
    assert!(notifications.current.is_some());
}

#[test]
fn empty_outcome_changes_nothing() {
    let mut auth = signed_in();
    let mut notifications = NotificationState::default();

    assert_eq!(apply_outcome(FragmentOutcome::default(), &mut auth, &mut notifications), None);
    assert_eq!(notifications, NotificationState::default());
    assert!(auth.has_session);
}

#[test]
fn active_link_is_marked() {
    assert!(link_class(AppRoute::RetinaScan, AppRoute::RetinaScan).contains("--active"));
    assert!(!link_class(AppRoute::Landing, AppRoute::RetinaScan).contains("--active"));
}

#[test]
fn plain_navigation_with_token_reloads_profile() {
    assert!(should_refresh_profile(&FragmentOutcome::default(), true));
    assert!(!should_refresh_profile(&FragmentOutcome::default(), false));
}

#[test]
fn fragment_signal_skips_profile_reload() {
    let outcome = FragmentOutcome {
        notification: Some(Notification::success(LOGOUT_SUCCESS)),
        cleaned_hash: Some("#/".into()),
        forced_logout: true,
    };

    assert!(!should_refresh_profile(&outcome, true));
}
