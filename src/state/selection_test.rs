use super::*;

fn asset(id: &str, name: &str) -> Asset {
    Asset {
        id: id.to_owned(),
        asset_name: name.to_owned(),
        ..Asset::default()
    }
}

// =============================================================
// SelectionSet membership
// =============================================================

#[test]
fn starts_empty() {
    let s = SelectionSet::default();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
}

#[test]
fn select_inserts_by_id() {
    let mut s = SelectionSet::default();
    s.select(asset("a", "Pump"));
    assert!(s.is_selected("a"));
    assert!(!s.is_selected("b"));
    assert_eq!(s.len(), 1);
}

#[test]
fn reselect_overwrites_the_stored_value() {
    let mut s = SelectionSet::default();
    s.select(asset("a", "Pump"));
    s.select(asset("a", "Pump (rebuilt)"));
    assert_eq!(s.len(), 1);
    let stored = s.get("a").expect("entry for a");
    assert_eq!(stored.asset_name, "Pump (rebuilt)");
}

#[test]
fn deselect_removes_regardless_of_how_often_selected() {
    let mut s = SelectionSet::default();
    s.select(asset("a", "Pump"));
    s.select(asset("a", "Pump"));
    s.deselect("a");
    assert!(!s.is_selected("a"));
    assert!(s.is_empty());
}

#[test]
fn deselect_missing_id_is_a_noop() {
    let mut s = SelectionSet::default();
    s.select(asset("a", "Pump"));
    s.deselect("zzz");
    assert_eq!(s.len(), 1);
}

#[test]
fn clear_always_yields_an_empty_set() {
    let mut s = SelectionSet::default();
    s.clear();
    assert!(s.is_empty());

    s.select(asset("a", "Pump"));
    s.select(asset("b", "Valve"));
    s.clear();
    assert!(s.is_empty());
}

#[test]
fn membership_is_the_net_effect_of_the_call_sequence() {
    let mut s = SelectionSet::default();
    s.select(asset("a", "Pump"));
    s.select(asset("b", "Valve"));
    s.deselect("a");
    s.clear();
    assert!(s.is_empty());

    s.select(asset("a", "Pump"));
    assert!(s.is_selected("a"));
    assert!(!s.is_selected("b"));
    assert_eq!(s.len(), 1);
}

// =============================================================
// Store handle
// =============================================================

#[test]
fn store_select_all_upserts_each_asset() {
    let store = SelectionStore::new();
    store.select(asset("a", "Pump"));
    store.select_all(vec![asset("a", "Pump (rebuilt)"), asset("b", "Valve")]);
    assert_eq!(store.len(), 2);
    assert!(store.is_selected("a"));
    assert!(store.is_selected("b"));
}

#[test]
fn store_clear_empties_and_batch_snapshot_reflects_membership() {
    let store = SelectionStore::new();
    store.select(asset("a", "Pump"));
    store.select(asset("b", "Valve"));
    let mut names: Vec<String> = store
        .selected_assets()
        .into_iter()
        .map(|a| a.asset_name)
        .collect();
    names.sort_unstable();
    assert_eq!(names, ["Pump", "Valve"]);

    store.clear();
    assert!(store.is_empty());
    assert!(store.selected_assets().is_empty());
}
