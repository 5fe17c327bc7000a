//! Session-gated tab actions shared by the tab bar, sidebar and empty state.
//!
//! UI chrome never opens a tab for a visitor whose session has loaded without
//! a user; it sends them to sign-in instead. Component handlers call these
//! through `RwSignal::try_update` so the checks stay testable without a DOM.

#[cfg(test)]
#[path = "tab_actions_test.rs"]
mod tab_actions_test;

use crate::state::session::SessionState;
use crate::state::tabs::{TabId, TabSpec, TabStore};
use crate::util::auth::should_redirect_unauth;

pub const CONSOLE_PATH: &str = "/console";
pub const NEW_SURVEY_PATH: &str = "/survey/new";

/// Result of a gated open request.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The tab is open and active.
    Opened(TabId),
    /// No signed-in user; the caller should navigate to sign-in.
    LoginRequired,
}

/// Open (or focus) a tab unless the session requires sign-in first.
pub fn open_guarded(store: &mut TabStore, session: &SessionState, spec: TabSpec) -> OpenOutcome {
    if should_redirect_unauth(session) {
        return OpenOutcome::LoginRequired;
    }
    OpenOutcome::Opened(store.add_tab(spec))
}

/// The tab opened by "new tab" and the empty-state button.
pub fn console_tab() -> TabSpec {
    TabSpec::new("Console", CONSOLE_PATH, "Console")
}

/// A blank survey form.
pub fn new_survey_tab() -> TabSpec {
    TabSpec::new("New survey", NEW_SURVEY_PATH, "Create survey")
}

pub fn project_dashboard_path(project_id: &str) -> String {
    format!("/console/project/{project_id}")
}

pub fn project_members_path(project_id: &str) -> String {
    format!("/console/project/{project_id}/members")
}

/// Dashboard tab for a project.
pub fn project_dashboard_tab(project_id: &str, project_name: &str) -> TabSpec {
    TabSpec::new(project_name, project_dashboard_path(project_id), format!("{project_name} dashboard"))
        .with_icon("dashboard")
        .with_project(project_id)
}

/// Member list tab for a project.
pub fn project_members_tab(project_id: &str) -> TabSpec {
    TabSpec::new("Members", project_members_path(project_id), format!("Project {project_id} members"))
        .with_icon("members")
        .with_project(project_id)
}
