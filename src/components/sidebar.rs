//! Sidebar navigation that opens or focuses tabs.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::tabs::{TabSpec, TabStore};
use crate::util::auth::LOGIN_PATH;
use crate::util::tab_actions::{self, OpenOutcome};

#[derive(Clone, Copy, PartialEq, Eq)]
enum NavItem {
    Console,
    NewSurvey,
    ProjectDashboard,
    ProjectMembers,
}

impl NavItem {
    fn label(self) -> &'static str {
        match self {
            Self::Console => "Console",
            Self::NewSurvey => "New survey",
            Self::ProjectDashboard => "Project dashboard",
            Self::ProjectMembers => "Members",
        }
    }

    fn needs_project(self) -> bool {
        matches!(self, Self::ProjectDashboard | Self::ProjectMembers)
    }

    /// Tab to open, `None` when the item needs a project and none is active.
    fn tab(self, project_id: Option<&str>) -> Option<TabSpec> {
        match (self, project_id) {
            (Self::Console, _) => Some(tab_actions::console_tab()),
            (Self::NewSurvey, _) => Some(tab_actions::new_survey_tab()),
            (Self::ProjectDashboard, Some(id)) => Some(tab_actions::project_dashboard_tab(id, &format!("Project {id}"))),
            (Self::ProjectMembers, Some(id)) => Some(tab_actions::project_members_tab(id)),
            (_, None) => None,
        }
    }
}

const ITEMS: &[NavItem] = &[NavItem::Console, NavItem::NewSurvey, NavItem::ProjectDashboard, NavItem::ProjectMembers];

#[component]
pub fn Sidebar() -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let user_name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    let items = ITEMS
        .iter()
        .map(|&item| {
            let navigate = navigate.clone();
            let on_click = move |_| {
                let outcome = session.with_untracked(|session| {
                    let spec = item.tab(session.active_project_id.as_deref())?;
                    workspace.try_update(|store| tab_actions::open_guarded(store, session, spec))
                });
                if outcome == Some(OpenOutcome::LoginRequired) {
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
            };
            let unavailable =
                move || item.needs_project() && session.with(|s| s.active_project_id.is_none());

            view! {
                <li>
                    <button
                        class="sidebar__item"
                        class:sidebar__item--disabled=unavailable
                        disabled=unavailable
                        on:click=on_click
                    >
                        {item.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar__user">{user_name}</div>
            <ul class="sidebar__items">{items}</ul>
        </aside>
    }
}
