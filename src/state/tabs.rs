//! Workspace tab store: the ordered open-tab sequence and the active selection.
//!
//! DESIGN
//! ======
//! `TabStore` is the only writer of `WorkspaceState`. Components hold it as
//! an `RwSignal<TabStore>` context and call its operations; they never edit
//! the tab list directly. Every successful mutation re-establishes the
//! active-id invariant and rewrites both durable records before returning.
//!
//! ERROR HANDLING
//! ==============
//! Persistence failures are logged and never roll back the in-memory change;
//! the next successful write carries the latest state. Operations naming a
//! tab that is no longer open return `TabError::NotFound` and change nothing.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, KeyValueStore};

pub const DEFAULT_TABS_KEY: &str = "workspace.tabs";
pub const DEFAULT_ACTIVE_KEY: &str = "workspace.activeTabId";
pub const DEFAULT_CLOSED_HISTORY_LIMIT: usize = 25;

// =============================================================================
// TAB
// =============================================================================

/// Opaque tab identity, generated once and stable for the tab's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Allocate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One open tab. Serialized field names match the persisted record layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    pub name: String,
    /// Logical address; at most one open tab has a given path.
    pub path: String,
    pub header_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_project: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Tab {
    fn from_spec(id: TabId, spec: TabSpec) -> Self {
        let mut tab = Self {
            id,
            name: String::new(),
            path: String::new(),
            header_name: String::new(),
            icon: None,
            image: None,
            is_project: None,
            project_id: None,
        };
        tab.apply_spec(spec);
        tab
    }

    fn apply_spec(&mut self, spec: TabSpec) {
        let TabSpec { name, path, header_name, icon, image, is_project, project_id } = spec;
        self.name = name;
        self.path = path;
        self.header_name = header_name;
        self.icon = icon;
        self.image = image;
        self.is_project = is_project;
        self.project_id = project_id;
    }
}

/// Everything needed to open a tab except its id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSpec {
    pub name: String,
    pub path: String,
    pub header_name: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub is_project: Option<bool>,
    pub project_id: Option<String>,
}

impl TabSpec {
    pub fn new(name: impl Into<String>, path: impl Into<String>, header_name: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into(), header_name: header_name.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Tag the tab as belonging to a project.
    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.is_project = Some(true);
        self.project_id = Some(project_id.into());
        self
    }
}

impl From<Tab> for TabSpec {
    fn from(tab: Tab) -> Self {
        let Tab { id: _, name, path, header_name, icon, image, is_project, project_id } = tab;
        Self { name, path, header_name, icon, image, is_project, project_id }
    }
}

// =============================================================================
// WORKSPACE STATE
// =============================================================================

/// The open-tab sequence plus the active tab id.
///
/// `active_tab_id` is `None` exactly when `tabs` is empty, and otherwise names
/// a tab in `tabs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceState {
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<TabId>,
}

impl WorkspaceState {
    fn index_of(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| &tab.id == id)
    }

    fn index_of_path(&self, path: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.path == path)
    }

    /// Drop duplicate paths (first wins) and point a dangling or missing
    /// active id at the first tab.
    fn repaired(self) -> Self {
        let mut seen = HashSet::new();
        let tabs: Vec<Tab> = self.tabs.into_iter().filter(|tab| seen.insert(tab.path.clone())).collect();
        let active_tab_id = match self.active_tab_id {
            Some(id) if tabs.iter().any(|tab| tab.id == id) => Some(id),
            _ => tabs.first().map(|tab| tab.id.clone()),
        };
        Self { tabs, active_tab_id }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Error for operations that name a tab.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TabError {
    /// The tab was already closed (or never existed).
    #[error("no open tab with id {0}")]
    NotFound(TabId),
}

/// Log a stale-id rejection and carry on, the way UI chrome treats it.
pub fn ignore_stale<T>(result: Result<T, TabError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::log!("ignored tab action: {e}");
            None
        }
    }
}

/// Storage keys and limits for a `TabStore`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabStoreConfig {
    pub tabs_key: String,
    pub active_key: String,
    /// Closed tabs kept for `reopen_closed_tab`; oldest dropped first.
    pub closed_history_limit: usize,
}

impl Default for TabStoreConfig {
    fn default() -> Self {
        Self {
            tabs_key: DEFAULT_TABS_KEY.to_owned(),
            active_key: DEFAULT_ACTIVE_KEY.to_owned(),
            closed_history_limit: DEFAULT_CLOSED_HISTORY_LIMIT,
        }
    }
}

/// Single source of truth for open tabs and the active selection.
#[derive(Debug)]
pub struct TabStore {
    state: WorkspaceState,
    closed: VecDeque<Tab>,
    storage: Arc<dyn KeyValueStore>,
    config: TabStoreConfig,
}

impl TabStore {
    /// Empty store that has not read its durable records yet.
    pub fn new(storage: Arc<dyn KeyValueStore>, config: TabStoreConfig) -> Self {
        Self { state: WorkspaceState::default(), closed: VecDeque::new(), storage, config }
    }

    /// Store rehydrated from `storage`.
    pub fn open(storage: Arc<dyn KeyValueStore>, config: TabStoreConfig) -> Self {
        let mut store = Self::new(storage, config);
        store.rehydrate();
        store
    }

    /// Replace in-memory state with the durable records. Missing or corrupt
    /// records degrade to an empty workspace.
    pub fn rehydrate(&mut self) {
        let tabs = match storage::load_json::<Vec<Tab>>(&*self.storage, &self.config.tabs_key) {
            Ok(tabs) => tabs.unwrap_or_default(),
            Err(e) => {
                leptos::logging::warn!("discarding persisted tabs: {e}");
                Vec::new()
            }
        };
        let active_tab_id = match storage::load_json::<TabId>(&*self.storage, &self.config.active_key) {
            Ok(id) => id,
            Err(e) => {
                leptos::logging::warn!("discarding persisted active tab: {e}");
                None
            }
        };
        self.state = WorkspaceState { tabs, active_tab_id }.repaired();
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn tabs(&self) -> &[Tab] {
        &self.state.tabs
    }

    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.state.active_tab_id.as_ref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        let id = self.state.active_tab_id.as_ref()?;
        self.get(id)
    }

    pub fn get(&self, id: &TabId) -> Option<&Tab> {
        self.state.tabs.iter().find(|tab| &tab.id == id)
    }

    pub fn find_by_path(&self, path: &str) -> Option<&Tab> {
        self.state.tabs.iter().find(|tab| tab.path == path)
    }

    pub fn is_active(&self, id: &TabId) -> bool {
        self.state.active_tab_id.as_ref() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.state.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.tabs.is_empty()
    }

    /// Copy of the workspace as persisted.
    pub fn snapshot(&self) -> WorkspaceState {
        self.state.clone()
    }

    /// Recently closed tabs, oldest first.
    pub fn closed_tabs(&self) -> impl Iterator<Item = &Tab> {
        self.closed.iter()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Open a tab, or focus the tab already open at `spec.path`.
    ///
    /// Returns the id of the tab that is now active.
    pub fn add_tab(&mut self, spec: TabSpec) -> TabId {
        if let Some(existing) = self.find_by_path(&spec.path) {
            let id = existing.id.clone();
            self.state.active_tab_id = Some(id.clone());
            self.persist();
            return id;
        }
        self.push_tab(TabId::generate(), spec)
    }

    /// Close a tab. When it was active, the tab that slides into its slot
    /// (or the new last tab) becomes active.
    ///
    /// # Errors
    ///
    /// `TabError::NotFound` if no open tab has `id`.
    pub fn close_tab(&mut self, id: &TabId) -> Result<(), TabError> {
        let index = self.require(id)?;
        let removed = self.state.tabs.remove(index);
        if self.state.active_tab_id.as_ref() == Some(&removed.id) {
            let next = index.min(self.state.tabs.len().saturating_sub(1));
            self.state.active_tab_id = self.state.tabs.get(next).map(|tab| tab.id.clone());
        }
        self.archive(removed);
        self.persist();
        Ok(())
    }

    /// Close every tab and clear the selection.
    pub fn close_all_tabs(&mut self) {
        let removed: Vec<Tab> = self.state.tabs.drain(..).collect();
        for tab in removed {
            self.archive(tab);
        }
        self.state.active_tab_id = None;
        self.persist();
    }

    /// Make `id` the active tab.
    ///
    /// # Errors
    ///
    /// `TabError::NotFound` if no open tab has `id`; the selection is unchanged.
    pub fn set_active_tab(&mut self, id: &TabId) -> Result<(), TabError> {
        self.require(id)?;
        self.state.active_tab_id = Some(id.clone());
        self.persist();
        Ok(())
    }

    /// Rename a tab's short label. `header_name` is left alone.
    ///
    /// # Errors
    ///
    /// `TabError::NotFound` if no open tab has `id`.
    pub fn update_tab_name(&mut self, id: &TabId, name: impl Into<String>) -> Result<(), TabError> {
        let index = self.require(id)?;
        if let Some(tab) = self.state.tabs.get_mut(index) {
            tab.name = name.into();
        }
        self.persist();
        Ok(())
    }

    /// Change a tab's display label. `name` is left alone.
    ///
    /// # Errors
    ///
    /// `TabError::NotFound` if no open tab has `id`.
    pub fn update_tab_header(&mut self, id: &TabId, header_name: impl Into<String>) -> Result<(), TabError> {
        let index = self.require(id)?;
        if let Some(tab) = self.state.tabs.get_mut(index) {
            tab.header_name = header_name.into();
        }
        self.persist();
        Ok(())
    }

    /// Point an open tab at a new path and labels without allocating a new id.
    ///
    /// The tab keeps its slot and becomes active. If another tab already has
    /// `spec.path`, the replaced tab is closed and that tab is focused
    /// instead; its id is returned.
    ///
    /// # Errors
    ///
    /// `TabError::NotFound` if no open tab has `id`.
    pub fn replace_tab(&mut self, id: &TabId, spec: TabSpec) -> Result<TabId, TabError> {
        let index = self.require(id)?;
        if let Some(other) = self.state.index_of_path(&spec.path).filter(|&other| other != index) {
            let survivor = self.state.tabs.get(other).map(|tab| tab.id.clone());
            let removed = self.state.tabs.remove(index);
            self.state.active_tab_id = survivor.clone();
            self.archive(removed);
            self.persist();
            return survivor.ok_or_else(|| TabError::NotFound(id.clone()));
        }
        if let Some(tab) = self.state.tabs.get_mut(index) {
            tab.apply_spec(spec);
        }
        self.state.active_tab_id = Some(id.clone());
        self.persist();
        Ok(id.clone())
    }

    /// Move a tab to `to_index`, clamped into the sequence. Selection is kept.
    ///
    /// # Errors
    ///
    /// `TabError::NotFound` if no open tab has `id`.
    pub fn move_tab(&mut self, id: &TabId, to_index: usize) -> Result<(), TabError> {
        let index = self.require(id)?;
        let tab = self.state.tabs.remove(index);
        let to_index = to_index.min(self.state.tabs.len());
        self.state.tabs.insert(to_index, tab);
        self.persist();
        Ok(())
    }

    /// Re-open the most recently closed tab with its original id. If its path
    /// has been opened again since, that tab is focused instead.
    pub fn reopen_closed_tab(&mut self) -> Option<TabId> {
        let tab = self.closed.pop_back()?;
        if self.find_by_path(&tab.path).is_some() {
            return Some(self.add_tab(tab.into()));
        }
        let id = if self.state.index_of(&tab.id).is_some() { TabId::generate() } else { tab.id.clone() };
        Some(self.push_tab(id, tab.into()))
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn require(&self, id: &TabId) -> Result<usize, TabError> {
        self.state.index_of(id).ok_or_else(|| TabError::NotFound(id.clone()))
    }

    fn push_tab(&mut self, id: TabId, spec: TabSpec) -> TabId {
        self.state.tabs.push(Tab::from_spec(id.clone(), spec));
        self.state.active_tab_id = Some(id.clone());
        self.persist();
        id
    }

    fn archive(&mut self, tab: Tab) {
        self.closed.push_back(tab);
        while self.closed.len() > self.config.closed_history_limit {
            self.closed.pop_front();
        }
    }

    /// Write both records. Each failure is logged independently.
    fn persist(&self) {
        if let Err(e) = storage::save_json(&*self.storage, &self.config.tabs_key, &self.state.tabs) {
            leptos::logging::warn!("tab list not persisted: {e}");
        }
        let active = match &self.state.active_tab_id {
            Some(id) => storage::save_json(&*self.storage, &self.config.active_key, id),
            None => self.storage.remove_item(&self.config.active_key),
        };
        if let Err(e) = active {
            leptos::logging::warn!("active tab not persisted: {e}");
        }
    }
}
