//! Per-tab route parameter scope.
//!
//! Each mounted tab view is wrapped in a context holding the `ParamScope`
//! resolved from that tab's own path. Views read parameters through
//! `use_tab_param`, never through the browser location, so sibling tabs at
//! `/console/project/1` and `/console/project/2` each see their own id.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use leptos::prelude::*;

use super::pattern::Params;
use crate::state::tabs::TabId;

/// Parameters visible to one tab's view subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamScope {
    tab_id: TabId,
    path: String,
    params: Params,
}

impl ParamScope {
    pub fn new(tab_id: TabId, path: impl Into<String>, params: Params) -> Self {
        Self { tab_id, path: path.into(), params }
    }

    /// The tab that owns this scope.
    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    /// The tab path the parameters were extracted from.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// The enclosing tab's scope, `None` outside a tab view.
pub fn use_param_scope() -> Option<ParamScope> {
    use_context::<ParamScope>()
}

/// A parameter from the enclosing tab's path.
pub fn use_tab_param(name: &str) -> Option<String> {
    use_param_scope().and_then(|scope| scope.get(name).map(str::to_owned))
}
