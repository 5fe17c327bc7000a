//! Project dashboard tab.
//!
//! The project id comes from this tab's own path, so two dashboards for
//! different projects can be open side by side.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::scope::{use_param_scope, use_tab_param};
use crate::state::session::SessionState;
use crate::state::tabs::{TabStore, ignore_stale};
use crate::util::auth::LOGIN_PATH;
use crate::util::tab_actions::{self, OpenOutcome};

#[component]
pub fn ProjectDashboardPage() -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let tab_id = use_param_scope().map(|scope| scope.tab_id().clone());
    let project_id = use_tab_param("projectId").unwrap_or_default();
    let heading = format!("Project {project_id}");
    let pinned = RwSignal::new(false);

    let navigate = use_navigate();
    let members_project = project_id.clone();
    let on_members = move |_| {
        let spec = tab_actions::project_members_tab(&members_project);
        let outcome =
            session.with_untracked(|session| workspace.try_update(|store| tab_actions::open_guarded(store, session, spec)));
        if outcome == Some(OpenOutcome::LoginRequired) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    };

    let pin_label = heading.clone();
    let on_pin = move |_| {
        let Some(id) = tab_id.as_ref() else {
            return;
        };
        let header = if pinned.get_untracked() { pin_label.clone() } else { format!("📌 {pin_label}") };
        workspace.update(|store| {
            ignore_stale(store.update_tab_header(id, header));
        });
        pinned.update(|p| *p = !*p);
    };

    view! {
        <div class="project-dashboard">
            <h2 class="project-dashboard__title">{heading}</h2>
            <p class="project-dashboard__id">"Project id: " <code>{project_id}</code></p>
            <div class="project-dashboard__actions">
                <button class="btn" on:click=on_members>"Members"</button>
                <button class="btn" on:click=on_pin>
                    {move || if pinned.get() { "Unpin" } else { "Pin" }}
                </button>
            </div>
        </div>
    }
}
