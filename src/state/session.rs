//! Session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tab chrome and the sidebar consult this before opening tabs: when loading
//! has finished without a user, navigation goes to `/login` instead.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active_project_id: Option<String>,
}

/// Current user, selected project, and whether the session is still loading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub active_project_id: Option<String>,
    pub loading: bool,
}

impl SessionState {
    /// State before the session request has completed.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Record the session lookup result. The user's project, if any, becomes
    /// the active project.
    pub fn finish_loading(&mut self, user: Option<SessionUser>) {
        self.active_project_id = user.as_ref().and_then(|u| u.active_project_id.clone());
        self.user = user;
        self.loading = false;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
