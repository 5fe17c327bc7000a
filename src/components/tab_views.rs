//! Content area that keeps every open tab's view mounted.
//!
//! DESIGN
//! ======
//! `ViewPool::sync` decides which tabs hold a mounted instance. The keyed
//! `<For>` below uses the pool's `InstanceId` as its key, so switching the
//! active tab only flips a CSS class and never rebuilds a view; closing a tab
//! or pointing it at a new path changes the key and remounts. Each view is
//! wrapped in a `Provider` carrying that tab's `ParamScope`.

use leptos::context::Provider;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{ViewFactory, ViewRegistry};
use crate::routing::scope::ParamScope;
use crate::state::session::SessionState;
use crate::state::tabs::TabStore;
use crate::util::auth::LOGIN_PATH;
use crate::util::tab_actions::{self, OpenOutcome};
use crate::util::view_pool::{Slot, ViewPool};

/// Every open tab's view, with only the active one visible.
#[component]
pub fn TabViews() -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();
    let registry = expect_context::<StoredValue<ViewRegistry>>();
    let pool = StoredValue::new(ViewPool::new());

    let slots = move || {
        workspace.with(|store| {
            registry.with_value(|registry| {
                pool.try_update_value(|pool| {
                    let slots = pool.sync(store.tabs(), store.active_tab_id(), registry);
                    let report = pool.last_report();
                    if !report.mounted.is_empty() || !report.unmounted.is_empty() {
                        leptos::logging::log!(
                            "tab views: {} mounted, {} unmounted, {} live",
                            report.mounted.len(),
                            report.unmounted.len(),
                            pool.len()
                        );
                    }
                    slots
                })
            })
        })
        .unwrap_or_default()
    };

    view! {
        <div class="tab-views">
            <Show when=move || workspace.with(TabStore::is_empty)>
                <EmptyWorkspace/>
            </Show>
            <For each=slots key=|entry| entry.instance let:entry>
                <TabSlot entry=entry/>
            </For>
        </div>
    }
}

/// One retained tab view. Visibility follows the active tab reactively.
#[component]
fn TabSlot(entry: Slot<ViewFactory>) -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();
    let Slot { tab_id, path, descriptor, .. } = entry;
    let render = descriptor.view;
    let scope = ParamScope::new(tab_id.clone(), path, descriptor.params);
    let data_tab_id = tab_id.to_string();
    let hidden = move || !workspace.with(|store| store.is_active(&tab_id));

    view! {
        <section
            class="tab-view"
            class:tab-view--hidden=hidden
            role="tabpanel"
            attr:data-tab-id=data_tab_id
        >
            <Provider value=scope>{render()}</Provider>
        </section>
    }
}

/// Shown instead of any view when no tab is open.
#[component]
fn EmptyWorkspace() -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_create = move |_| {
        let outcome = session.with_untracked(|session| {
            workspace.try_update(|store| tab_actions::open_guarded(store, session, tab_actions::console_tab()))
        });
        if outcome == Some(OpenOutcome::LoginRequired) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    };

    view! {
        <div class="tab-views__empty">
            <p class="tab-views__empty-title">"No tabs open"</p>
            <button class="btn tab-views__create" on:click=on_create>
                "Create your first tab"
            </button>
        </div>
    }
}
