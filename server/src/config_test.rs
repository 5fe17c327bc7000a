use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// ServerConfig::from_lookup
// =============================================================================

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_and_host_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("BIND_HOST", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_is_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".into()));
}

#[test]
fn invalid_host_is_error() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_HOST", "localhost:1")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindHost("localhost:1".into()));
}

#[test]
fn dev_session_off_by_default_and_on_when_toggled() {
    assert_eq!(ServerConfig::from_lookup(lookup(&[("DEV_USER_NAME", "Ann")])).unwrap().dev_session, None);

    let cfg = ServerConfig::from_lookup(lookup(&[("DEV_SESSION", "yes")])).unwrap();
    assert_eq!(
        cfg.dev_session,
        Some(DevSession { user_name: DEFAULT_DEV_USER_NAME.into(), project_id: DEFAULT_DEV_PROJECT_ID.into() })
    );
}

#[test]
fn dev_session_identity_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("DEV_SESSION", "on"),
        ("DEV_USER_NAME", "Ann"),
        ("DEV_PROJECT_ID", "p-9"),
    ]))
    .unwrap();
    assert_eq!(cfg.dev_session, Some(DevSession { user_name: "Ann".into(), project_id: "p-9".into() }));
}

#[test]
fn unparsable_toggle_is_error() {
    let err = ServerConfig::from_lookup(lookup(&[("DEV_SESSION", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidToggle { key: "DEV_SESSION".into(), value: "maybe".into() });
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", " yes "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

