//! Retained view instances for open tabs.
//!
//! DESIGN
//! ======
//! Every open tab whose path resolves gets exactly one mounted instance. An
//! instance survives any number of active-tab switches; only closing the tab
//! or pointing it at a different path retires it. `sync` is called with the
//! current workspace and returns one `Slot` per mounted tab, keyed by
//! `InstanceId`, so a keyed list renderer mounts exactly when the pool mounts.

#[cfg(test)]
#[path = "view_pool_test.rs"]
mod view_pool_test;

use std::collections::{HashMap, HashSet};

use crate::routing::resolver::{Resolver, ViewDescriptor};
use crate::state::tabs::{Tab, TabId};

/// Identity of one mounted view instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A mounted tab view as the renderer should lay it out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot<V> {
    pub tab_id: TabId,
    pub path: String,
    pub instance: InstanceId,
    pub visible: bool,
    pub descriptor: ViewDescriptor<V>,
}

/// Instances created and retired by the most recent `sync`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub mounted: Vec<InstanceId>,
    pub unmounted: Vec<InstanceId>,
}

#[derive(Clone, Debug)]
struct Retained {
    path: String,
    instance: InstanceId,
}

/// Bookkeeping for which tabs currently hold a mounted view.
#[derive(Clone, Debug, Default)]
pub struct ViewPool {
    retained: HashMap<TabId, Retained>,
    next_instance: u64,
    mounts: u64,
    unmounts: u64,
    last_report: SyncReport,
}

impl ViewPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile mounted instances with `tabs` and lay them out in tab order.
    ///
    /// Only the slot for `active` is visible. Tabs whose path no route
    /// matches get no slot and lose any instance they held.
    pub fn sync<V: Clone>(&mut self, tabs: &[Tab], active: Option<&TabId>, resolver: &Resolver<V>) -> Vec<Slot<V>> {
        let mut report = SyncReport::default();
        let mut slots = Vec::with_capacity(tabs.len());
        let mut live = HashSet::with_capacity(tabs.len());

        for tab in tabs {
            let Some(descriptor) = resolver.resolve(&tab.path) else {
                continue;
            };
            live.insert(tab.id.clone());

            let kept = self.retained.get(&tab.id).filter(|r| r.path == tab.path).map(|r| r.instance);
            let instance = match kept {
                Some(instance) => instance,
                None => {
                    let instance = self.allocate();
                    if let Some(old) = self.retained.insert(tab.id.clone(), Retained { path: tab.path.clone(), instance }) {
                        report.unmounted.push(old.instance);
                    }
                    report.mounted.push(instance);
                    instance
                }
            };

            slots.push(Slot {
                tab_id: tab.id.clone(),
                path: tab.path.clone(),
                instance,
                visible: active == Some(&tab.id),
                descriptor,
            });
        }

        self.retained.retain(|id, retained| {
            let keep = live.contains(id);
            if !keep {
                report.unmounted.push(retained.instance);
            }
            keep
        });

        report.unmounted.sort_unstable();
        self.mounts += report.mounted.len() as u64;
        self.unmounts += report.unmounted.len() as u64;
        self.last_report = report;
        slots
    }

    /// The instance currently mounted for `id`.
    pub fn instance_of(&self, id: &TabId) -> Option<InstanceId> {
        self.retained.get(id).map(|r| r.instance)
    }

    /// Total instances ever mounted.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }

    /// Total instances ever retired.
    pub fn unmount_count(&self) -> u64 {
        self.unmounts
    }

    pub fn last_report(&self) -> &SyncReport {
        &self.last_report
    }

    /// Number of currently mounted instances.
    pub fn len(&self) -> usize {
        self.retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    fn allocate(&mut self) -> InstanceId {
        self.next_instance += 1;
        InstanceId(self.next_instance)
    }
}
