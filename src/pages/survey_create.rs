//! Survey creation form hosted in a tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form renames its own tab as the title is typed. Finishing hands the
//! tab over to the project dashboard with `replace_tab`, so the tab keeps its
//! id and position while the form is torn down and the dashboard mounts.

#[cfg(test)]
#[path = "survey_create_test.rs"]
mod survey_create_test;

use leptos::prelude::*;

use crate::routing::scope::use_param_scope;
use crate::state::session::SessionState;
use crate::state::tabs::{TabSpec, TabStore, ignore_stale};
use crate::util::tab_actions;

const UNTITLED: &str = "New survey";

/// Tab label for a survey title, falling back to a placeholder when blank.
fn tab_label(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() { UNTITLED.to_owned() } else { title.to_owned() }
}

/// The dashboard tab a finished survey hands over to.
fn finished_tab(project_id: &str, title: &str) -> TabSpec {
    let mut spec = tab_actions::project_dashboard_tab(project_id, &tab_label(title));
    spec.header_name = format!("{} results", tab_label(title));
    spec
}

#[component]
pub fn SurveyCreatePage() -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let tab_id = use_param_scope().map(|scope| scope.tab_id().clone());
    let title = RwSignal::new(String::new());
    let project = move || session.with(|s| s.active_project_id.clone());

    let rename_id = tab_id.clone();
    let on_title = move |value: String| {
        if let Some(id) = rename_id.as_ref() {
            workspace.update(|store| {
                ignore_stale(store.update_tab_name(id, tab_label(&value)));
            });
        }
        title.set(value);
    };

    let on_finish = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(id), Some(project_id)) = (tab_id.as_ref(), project()) else {
            return;
        };
        let spec = finished_tab(&project_id, &title.get_untracked());
        workspace.update(|store| {
            ignore_stale(store.replace_tab(id, spec));
        });
    };

    view! {
        <form class="survey-form" on:submit=on_finish>
            <input
                class="survey-form__title"
                type="text"
                placeholder="Survey title"
                prop:value=move || title.get()
                on:input=move |ev| on_title(event_target_value(&ev))
            />
            <Show when=move || project().is_none()>
                <p class="survey-form__hint">"Select a project before finishing."</p>
            </Show>
            <button class="btn survey-form__finish" type="submit" disabled=move || project().is_none()>
                "Finish"
            </button>
        </form>
    }
}
