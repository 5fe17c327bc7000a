//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser router only distinguishes the sign-in page from the workspace.
//! Everything a user opens lives in a tab, and tab paths are resolved by the
//! `ViewRegistry` below rather than by the browser location.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    console::ConsolePage, project_dashboard::ProjectDashboardPage, project_members::ProjectMembersPage,
    sign_in::SignInPage, survey_create::SurveyCreatePage, workspace::WorkspacePage,
};
use crate::routing::pattern::PatternError;
use crate::routing::resolver::Resolver;
use crate::state::session::SessionState;
use crate::state::tabs::{TabStore, TabStoreConfig};
use crate::util::storage;

/// Renders the view for one tab.
pub type ViewFactory = fn() -> AnyView;

/// Tab path patterns and the views they render.
pub type ViewRegistry = Resolver<ViewFactory>;

/// Build the tab view table. Static routes come before the parameterised
/// routes that would otherwise shadow them.
///
/// # Errors
///
/// Returns a `PatternError` if a route pattern is malformed.
pub fn view_registry() -> Result<ViewRegistry, PatternError> {
    Resolver::new()
        .route("/console", console_view as ViewFactory)?
        .route("/survey/new", survey_create_view)?
        .route("/console/project/:projectId/members", project_members_view)?
        .route("/console/project/:projectId", project_dashboard_view)
}

fn console_view() -> AnyView {
    view! { <ConsolePage/> }.into_any()
}

fn survey_create_view() -> AnyView {
    view! { <SurveyCreatePage/> }.into_any()
}

fn project_dashboard_view() -> AnyView {
    view! { <ProjectDashboardPage/> }.into_any()
}

fn project_members_view() -> AnyView {
    view! { <ProjectMembersPage/> }.into_any()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, the tab store and the view registry, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::loading());
    // Empty until the client reads its stored tabs, so SSR and hydration agree.
    let workspace = RwSignal::new(TabStore::new(storage::default_backend(), TabStoreConfig::default()));

    let registry = match view_registry() {
        Ok(registry) => registry,
        Err(e) => {
            leptos::logging::error!("tab routes rejected: {e}");
            Resolver::new()
        }
    };
    for (earlier, shadowed) in registry.shadowed_routes() {
        leptos::logging::warn!("tab route {shadowed} is unreachable behind {earlier}");
    }
    let registry = StoredValue::new(registry);

    provide_context(session);
    provide_context(workspace);
    provide_context(registry);

    Effect::new(move || {
        workspace.update(TabStore::rehydrate);
        leptos::logging::log!("workspace restored with {} tabs", workspace.with_untracked(TabStore::len));
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        session.update(|s| s.finish_loading(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tabshell.css"/>
        <Title text="Workspace"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=SignInPage/>
                <Route path=StaticSegment("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
