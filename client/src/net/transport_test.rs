use super::*;

#[test]
fn timeout_message_names_limit() {
    assert_eq!(timeout_message(Duration::from_secs(30)), "request timed out after 30s");
}

#[test]
fn new_takes_timeout_from_config() {
    let config = AppConfig { request_timeout: Some(Duration::from_secs(5)), ..AppConfig::default() };
    assert_eq!(GlooTransport::new(&config).timeout, Some(Duration::from_secs(5)));
    assert_eq!(GlooTransport::new(&AppConfig::default()).timeout, None);
}
