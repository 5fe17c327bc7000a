use super::*;
use std::sync::Arc;

use crate::state::session::SessionUser;
use crate::state::tabs::TabStoreConfig;
use crate::util::storage::MemoryStorage;

fn store() -> TabStore {
    TabStore::new(Arc::new(MemoryStorage::new()), TabStoreConfig::default())
}

fn signed_in() -> SessionState {
    let mut session = SessionState::loading();
    session.finish_loading(Some(SessionUser {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        active_project_id: Some("p-1".to_owned()),
    }));
    session
}

#[test]
fn open_guarded_opens_for_signed_in_user() {
    let mut s = store();
    let outcome = open_guarded(&mut s, &signed_in(), console_tab());
    let OpenOutcome::Opened(id) = outcome else {
        panic!("expected tab to open");
    };
    assert_eq!(s.active_tab_id(), Some(&id));
    assert_eq!(s.tabs()[0].path, CONSOLE_PATH);
}

#[test]
fn open_guarded_requires_login_when_session_loaded_without_user() {
    let mut s = store();
    let mut session = SessionState::loading();
    session.finish_loading(None);
    assert_eq!(open_guarded(&mut s, &session, console_tab()), OpenOutcome::LoginRequired);
    assert!(s.is_empty());
}

#[test]
fn open_guarded_allows_open_while_session_loading() {
    let mut s = store();
    assert!(matches!(open_guarded(&mut s, &SessionState::loading(), new_survey_tab()), OpenOutcome::Opened(_)));
    assert_eq!(s.len(), 1);
}

#[test]
fn open_guarded_focuses_existing_path() {
    let mut s = store();
    let first = open_guarded(&mut s, &signed_in(), console_tab());
    open_guarded(&mut s, &signed_in(), new_survey_tab());
    let again = open_guarded(&mut s, &signed_in(), console_tab());
    assert_eq!(first, again);
    assert_eq!(s.len(), 2);
}

#[test]
fn project_tabs_are_tagged_with_project() {
    let dashboard = project_dashboard_tab("42", "Acme");
    assert_eq!(dashboard.path, "/console/project/42");
    assert_eq!(dashboard.name, "Acme");
    assert_eq!(dashboard.is_project, Some(true));
    assert_eq!(dashboard.project_id.as_deref(), Some("42"));

    let members = project_members_tab("42");
    assert_eq!(members.path, "/console/project/42/members");
    assert_eq!(members.project_id.as_deref(), Some("42"));
}
