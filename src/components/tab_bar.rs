//! Horizontal tab strip with open, close, close-all and reopen controls.
//!
//! DESIGN
//! ======
//! Rows are keyed by tab id and read their labels from the store by id, so a
//! rename updates the label in place. Actions on a tab that closed in the
//! meantime are logged and ignored.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::tabs::{TabId, TabStore, ignore_stale};
use crate::util::auth::LOGIN_PATH;
use crate::util::tab_actions::{self, OpenOutcome};

#[component]
pub fn TabBar() -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_new = move |_| {
        let outcome = session.with_untracked(|session| {
            workspace.try_update(|store| tab_actions::open_guarded(store, session, tab_actions::console_tab()))
        });
        if outcome == Some(OpenOutcome::LoginRequired) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    };

    let on_reopen = move |_| {
        workspace.update(|store| {
            if store.reopen_closed_tab().is_none() {
                leptos::logging::log!("no closed tab to reopen");
            }
        });
    };

    let tab_ids = move || workspace.with(|store| store.tabs().iter().map(|tab| tab.id.clone()).collect::<Vec<_>>());
    let nothing_closed = move || workspace.with(|store| store.closed_tabs().next().is_none());

    view! {
        <nav class="tab-bar" role="tablist">
            <div class="tab-bar__tabs">
                <For each=tab_ids key=TabId::clone let:id>
                    <TabButton id=id/>
                </For>
            </div>
            <button class="tab-bar__new" title="New tab" aria-label="New tab" on:click=on_new>
                "+"
            </button>
            <span class="tab-bar__spacer"></span>
            <button
                class="btn tab-bar__reopen"
                title="Reopen closed tab"
                disabled=nothing_closed
                on:click=on_reopen
            >
                "Reopen"
            </button>
            <button
                class="btn tab-bar__close-all"
                title="Close all tabs"
                disabled=move || workspace.with(TabStore::is_empty)
                on:click=move |_| workspace.update(TabStore::close_all_tabs)
            >
                "Close all"
            </button>
        </nav>
    }
}

/// One tab in the strip.
#[component]
fn TabButton(id: TabId) -> impl IntoView {
    let workspace = expect_context::<RwSignal<TabStore>>();

    let label = {
        let id = id.clone();
        move || workspace.with(|store| store.get(&id).map(|tab| tab.name.clone()).unwrap_or_default())
    };
    let title = {
        let id = id.clone();
        move || workspace.with(|store| store.get(&id).map(|tab| tab.header_name.clone()).unwrap_or_default())
    };
    let icon = {
        let id = id.clone();
        move || workspace.with(|store| store.get(&id).and_then(|tab| tab.icon.clone()))
    };
    let is_active = {
        let id = id.clone();
        move || workspace.with(|store| store.is_active(&id))
    };

    let on_activate = {
        let id = id.clone();
        move |_| {
            workspace.update(|store| {
                ignore_stale(store.set_active_tab(&id));
            });
        }
    };
    let on_close = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        workspace.update(|store| {
            ignore_stale(store.close_tab(&id));
        });
    };

    view! {
        <div
            class="tab-bar__tab"
            class:tab-bar__tab--active=is_active.clone()
            role="tab"
            aria-selected=move || if is_active() { "true" } else { "false" }
            title=title
            on:click=on_activate
        >
            {move || icon().map(|icon| view! { <span class=format!("tab-bar__icon tab-bar__icon--{icon}")></span> })}
            <span class="tab-bar__label">{label}</span>
            <button class="tab-bar__close" title="Close tab" aria-label="Close tab" on:click=on_close>
                "✕"
            </button>
        </div>
    }
}
