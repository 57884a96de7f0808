use super::*;

#[test]
fn load_config_falls_back_to_local_defaults() {
    let config = load_config();
    assert!(config.api_url.starts_with("http"));
    assert!(config.dashboard_url.starts_with("http"));
    assert_eq!(config.app_name, "frontend");
}
