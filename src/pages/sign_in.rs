//! Sign-in landing page.
//!
//! The workspace sends visitors here when the session has no user. Signing in
//! itself is handled by the backend; this page only links back once a
//! session exists.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_continue = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href("/") {
                    leptos::logging::warn!("navigation failed: {e:?}");
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Workspace"</h1>
                <Show
                    when=move || session.with(SessionState::is_signed_in)
                    fallback=|| view! { <p class="login-card__subtitle">"Sign in to open your workspace."</p> }
                >
                    <p class="login-card__subtitle">
                        {move || session.with(|s| s.user.as_ref().map(|u| format!("Signed in as {}", u.name)))}
                    </p>
                </Show>
                <a href="/" class="login-button" on:click=on_continue>
                    "Continue"
                </a>
            </div>
        </div>
    }
}
