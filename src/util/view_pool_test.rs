use super::*;
use std::sync::Arc;

use crate::state::tabs::{TabSpec, TabStore, TabStoreConfig};
use crate::util::storage::MemoryStorage;

fn resolver() -> Resolver<&'static str> {
    Resolver::new()
        .route("/console", "console")
        .and_then(|r| r.route("/survey/new", "survey"))
        .and_then(|r| r.route("/console/project/:projectId", "dashboard"))
        .unwrap()
}

fn store() -> TabStore {
    TabStore::new(Arc::new(MemoryStorage::new()), TabStoreConfig::default())
}

fn open(store: &mut TabStore, path: &str) -> TabId {
    store.add_tab(TabSpec::new(path, path, path))
}

fn sync(pool: &mut ViewPool, store: &TabStore) -> Vec<Slot<&'static str>> {
    pool.sync(store.tabs(), store.active_tab_id(), &resolver())
}

fn visible(slots: &[Slot<&'static str>]) -> Vec<TabId> {
    slots.iter().filter(|s| s.visible).map(|s| s.tab_id.clone()).collect()
}

// =============================================================
// mount / retain
// =============================================================

#[test]
fn each_open_tab_gets_one_instance() {
    let mut s = store();
    let a = open(&mut s, "/console");
    let b = open(&mut s, "/survey/new");
    let mut pool = ViewPool::new();

    let slots = sync(&mut pool, &s);
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].tab_id, a);
    assert_eq!(slots[1].tab_id, b);
    assert_ne!(slots[0].instance, slots[1].instance);
    assert_eq!(pool.mount_count(), 2);
    assert_eq!(pool.last_report().mounted.len(), 2);
}

#[test]
fn switching_active_tab_keeps_instances() {
    let mut s = store();
    let a = open(&mut s, "/console");
    let b = open(&mut s, "/survey/new");
    let mut pool = ViewPool::new();
    sync(&mut pool, &s);
    let before = (pool.instance_of(&a), pool.instance_of(&b));

    for id in [&a, &b, &a, &b] {
        s.set_active_tab(id).unwrap();
        sync(&mut pool, &s);
    }

    assert_eq!((pool.instance_of(&a), pool.instance_of(&b)), before);
    assert_eq!(pool.mount_count(), 2);
    assert_eq!(pool.unmount_count(), 0);
    assert_eq!(pool.last_report(), &SyncReport::default());
}

#[test]
fn exactly_one_slot_is_visible() {
    let mut s = store();
    let a = open(&mut s, "/console");
    open(&mut s, "/survey/new");
    let c = open(&mut s, "/console/project/1");
    let mut pool = ViewPool::new();

    assert_eq!(visible(&sync(&mut pool, &s)), vec![c]);
    s.set_active_tab(&a).unwrap();
    assert_eq!(visible(&sync(&mut pool, &s)), vec![a]);
}

#[test]
fn no_active_tab_means_nothing_visible() {
    let s = store();
    let mut pool = ViewPool::new();
    let slots = sync(&mut pool, &s);
    assert!(slots.is_empty());
    assert!(pool.is_empty());
}

// =============================================================
// unmount
// =============================================================

#[test]
fn closing_tab_unmounts_only_that_instance() {
    let mut s = store();
    let a = open(&mut s, "/console");
    let b = open(&mut s, "/survey/new");
    let mut pool = ViewPool::new();
    sync(&mut pool, &s);
    let a_instance = pool.instance_of(&a).unwrap();
    let b_instance = pool.instance_of(&b).unwrap();

    s.close_tab(&b).unwrap();
    let slots = sync(&mut pool, &s);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].instance, a_instance);
    assert_eq!(pool.instance_of(&b), None);
    assert_eq!(pool.last_report().unmounted, vec![b_instance]);
    assert_eq!(pool.unmount_count(), 1);
}

#[test]
fn close_all_unmounts_everything() {
    let mut s = store();
    open(&mut s, "/console");
    open(&mut s, "/survey/new");
    let mut pool = ViewPool::new();
    sync(&mut pool, &s);

    s.close_all_tabs();
    assert!(sync(&mut pool, &s).is_empty());
    assert!(pool.is_empty());
    assert_eq!(pool.last_report().unmounted.len(), 2);
}

#[test]
fn replacing_tab_path_remounts_in_place() {
    let mut s = store();
    open(&mut s, "/console");
    let survey = open(&mut s, "/survey/new");
    let mut pool = ViewPool::new();
    sync(&mut pool, &s);
    let old = pool.instance_of(&survey).unwrap();

    s.replace_tab(&survey, TabSpec::new("Demo", "/console/project/9", "Demo")).unwrap();
    let slots = sync(&mut pool, &s);

    let new = pool.instance_of(&survey).unwrap();
    assert_ne!(old, new);
    assert_eq!(slots[1].tab_id, survey);
    assert_eq!(slots[1].descriptor.params.get("projectId"), Some("9"));
    assert_eq!(pool.last_report().mounted, vec![new]);
    assert_eq!(pool.last_report().unmounted, vec![old]);
}

#[test]
fn unresolved_path_gets_no_slot() {
    let mut s = store();
    open(&mut s, "/console");
    let lost = open(&mut s, "/nowhere");
    let mut pool = ViewPool::new();

    let slots = sync(&mut pool, &s);
    assert_eq!(slots.len(), 1);
    assert_eq!(pool.instance_of(&lost), None);
    assert!(visible(&slots).is_empty());
}

// =============================================================
// params
// =============================================================

#[test]
fn sibling_tabs_on_same_pattern_get_own_params() {
    let mut s = store();
    let one = open(&mut s, "/console/project/1");
    let two = open(&mut s, "/console/project/2");
    let mut pool = ViewPool::new();

    let slots = sync(&mut pool, &s);
    let param = |id: &TabId| {
        slots.iter().find(|slot| &slot.tab_id == id).and_then(|slot| slot.descriptor.params.get("projectId"))
    };
    assert_eq!(param(&one), Some("1"));
    assert_eq!(param(&two), Some("2"));
    assert!(slots.iter().all(|slot| slot.descriptor.view == "dashboard"));
}
