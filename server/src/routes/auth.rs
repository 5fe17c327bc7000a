//! Session lookup for the browser client.
//!
//! Sign-in itself lives outside this host. With the development session
//! enabled every request is answered with one fixed user; otherwise the
//! visitor is unauthenticated.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tabshell::state::session::SessionUser;

use super::AppState;

const DEV_USER_ID: &str = "dev-user";

/// `GET /api/auth/me`: current user, or `401` when no session exists.
pub async fn me(State(state): State<AppState>) -> Result<Json<SessionUser>, StatusCode> {
    let dev = state.dev_session.as_ref().ok_or(StatusCode::UNAUTHORIZED)?;
    tracing::debug!(user = %dev.user_name, "serving development session");
    Ok(Json(SessionUser {
        id: DEV_USER_ID.to_owned(),
        name: dev.user_name.clone(),
        active_project_id: Some(dev.project_id.clone()),
    }))
}
