//! Workspace page: sidebar, tab strip and the tab content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Every view a user opens renders
//! inside a tab below the strip; the browser location stays at `/`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::components::tab_bar::TabBar;
use crate::components::tab_views::TabViews;
use crate::state::session::SessionState;
use crate::state::tabs::TabStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let workspace = expect_context::<RwSignal<TabStore>>();
    install_unauth_redirect(session, use_navigate());

    let header = move || workspace.with(|store| store.active_tab().map(|tab| tab.header_name.clone()));

    view! {
        <div class="workspace-page">
            <Sidebar/>
            <main class="workspace-page__main">
                <TabBar/>
                <Show when=move || header().is_some()>
                    <h1 class="workspace-page__header">{move || header().unwrap_or_default()}</h1>
                </Show>
                <TabViews/>
            </main>
        </div>
    }
}
