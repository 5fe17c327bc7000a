//! Project member list tab.
//!
//! Invitations are kept in component state until the tab closes.

#[cfg(test)]
#[path = "project_members_test.rs"]
mod project_members_test;

use leptos::prelude::*;

use crate::routing::scope::use_tab_param;

/// Normalise an invite address; `None` when it cannot be an email.
fn parse_invite(raw: &str) -> Option<String> {
    let email = raw.trim().to_ascii_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return None;
    }
    Some(email)
}

#[component]
pub fn ProjectMembersPage() -> impl IntoView {
    let project_id = use_tab_param("projectId").unwrap_or_default();
    let draft = RwSignal::new(String::new());
    let invited = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);

    let on_invite = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(email) = parse_invite(&draft.get_untracked()) else {
            error.set(Some("Enter a valid email address.".to_owned()));
            return;
        };
        error.set(None);
        invited.update(|list| {
            if !list.contains(&email) {
                list.push(email);
            }
        });
        draft.set(String::new());
    };

    view! {
        <div class="project-members">
            <h2>{format!("Members of project {project_id}")}</h2>
            <form class="project-members__invite" on:submit=on_invite>
                <input
                    type="email"
                    placeholder="teammate@example.com"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Invite"</button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="project-members__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="project-members__list">
                {move || {
                    invited
                        .get()
                        .into_iter()
                        .map(|email| view! { <li>{email}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
