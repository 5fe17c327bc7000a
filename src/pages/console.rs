//! Console tab: entry point with shortcuts and a scratchpad.
//!
//! The scratchpad is plain component state. It survives switching to another
//! tab and back because the view stays mounted while its tab is open.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::tabs::{TabSpec, TabStore};
use crate::util::auth::LOGIN_PATH;
use crate::util::tab_actions::{self, OpenOutcome};

#[component]
pub fn ConsolePage() -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let notes = RwSignal::new(String::new());

    let open_count = move || workspace.with(TabStore::len);
    let project = move || session.with(|s| s.active_project_id.clone());

    let navigate = use_navigate();
    let open = move |spec: TabSpec| {
        let outcome =
            session.with_untracked(|session| workspace.try_update(|store| tab_actions::open_guarded(store, session, spec)));
        if outcome == Some(OpenOutcome::LoginRequired) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    };

    let open_survey = open.clone();
    let on_new_survey = move |_| open_survey(tab_actions::new_survey_tab());
    let on_open_project = move |_| {
        if let Some(project_id) = project() {
            open(tab_actions::project_dashboard_tab(&project_id, &format!("Project {project_id}")));
        }
    };

    view! {
        <div class="console-page">
            <p class="console-page__summary">{move || format!("{} tabs open", open_count())}</p>
            <div class="console-page__actions">
                <button class="btn" on:click=on_new_survey>"New survey"</button>
                <button class="btn" disabled=move || project().is_none() on:click=on_open_project>
                    "Open project"
                </button>
            </div>
            <label class="console-page__notes">
                "Scratchpad"
                <textarea
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}
