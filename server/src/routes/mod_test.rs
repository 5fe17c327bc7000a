use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn app_state_carries_dev_session_only_when_enabled() {
    assert!(AppState::from(&ServerConfig::default()).dev_session.is_none());

    let config = ServerConfig {
        dev_session: Some(DevSession { user_name: "Ann".into(), project_id: "p-1".into() }),
        ..ServerConfig::default()
    };
    let state = AppState::from(&config);
    assert_eq!(state.dev_session.as_deref().map(|d| d.user_name.as_str()), Some("Ann"));
}
