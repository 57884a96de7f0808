use super::*;

#[test]
fn show_replaces_and_bumps_seq() {
    let mut state = NotificationState::default();
    let first = state.show(Notification::success("one"));
    let second = state.show(Notification::error("two"));
    assert_eq!(second, first + 1);
    assert_eq!(state.current, Some(Notification::error("two")));
}

#[test]
fn stale_timer_does_not_dismiss_newer_toast() {
    let mut state = NotificationState::default();
    let stale = state.show(Notification::success("one"));
    state.show(Notification::success("two"));

    assert!(!state.expire(stale));
    assert_eq!(state.current, Some(Notification::success("two")));
}

#[test]
fn expire_clears_current_toast_once() {
    let mut state = NotificationState::default();
    let seq = state.show(Notification::success("one"));
    assert!(state.expire(seq));
    assert!(!state.expire(seq));
    assert_eq!(state.current, None);
}

#[test]
fn auto_dismiss_is_five_seconds() {
    assert_eq!(AUTO_DISMISS, Duration::from_secs(5));
}
