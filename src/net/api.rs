//! REST helpers for the session endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns `None`, since the session cookie only matters
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures are logged and reported as "no user", so a
//! broken session endpoint degrades to the sign-in page instead of a panic.

#![allow(clippy::unused_async)]

use crate::state::session::SessionUser;

pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";

/// Fetch the currently authenticated user.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(CURRENT_USER_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("session request failed: {e}");
                return None;
            }
        };
        if !(200..300).contains(&resp.status()) {
            return None;
        }
        match resp.json::<SessionUser>().await {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("session response not understood: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
