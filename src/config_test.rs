use super::*;

#[test]
fn unset_values_use_defaults() {
    assert_eq!(HostConfig::from_values(None, None).unwrap(), HostConfig::default());
}

#[test]
fn blank_values_use_defaults() {
    let config = HostConfig::from_values(Some("  ".into()), Some(String::new())).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
}

#[test]
fn explicit_values_are_used() {
    let config = HostConfig::from_values(Some("9000".into()), Some("/srv/retinascan".into())).unwrap();
    assert_eq!(config.port, 9000);
    assert_eq!(config.index_html(), PathBuf::from("/srv/retinascan/index.html"));
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = HostConfig::from_values(Some("eighty".into()), None).unwrap_err();
    assert!(matches!(err, HostConfigError::InvalidPort(ref raw) if raw == "eighty"));
}

#[test]
fn missing_bundle_is_reported() {
    let config = HostConfig::from_values(None, Some("/definitely/not/a/bundle".into())).unwrap();
    assert!(matches!(config.check_bundle(), Err(HostConfigError::MissingIndex(_))));
}
