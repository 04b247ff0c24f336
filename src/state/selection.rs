#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::net::types::Asset;

/// The working set of assets chosen for a bulk action, keyed by asset id.
///
/// Each entry holds the full asset value passed at the last `select` call
/// for that id; the set never refreshes stale copies on its own. Callers
/// that want an edited asset reflected here re-select it. Never persisted —
/// a fresh set per page visit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    entries: HashMap<String, Asset>,
}

impl SelectionSet {
    /// Idempotent upsert: insert or overwrite the entry for `asset.id`.
    pub fn select(&mut self, asset: Asset) {
        self.entries.insert(asset.id.clone(), asset);
    }

    /// Remove the entry for `id`; silently does nothing if absent.
    pub fn deselect(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// Empty the set unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the selected values, for batch payloads. Unordered.
    pub fn assets(&self) -> Vec<Asset> {
        self.entries.values().cloned().collect()
    }
}

/// Injectable handle for the process-wide selection set.
///
/// The signal is private so membership only changes through these
/// operations; bulk-action UI subscribes through the reads to
/// enable/disable itself and build batch payloads.
#[derive(Clone, Copy)]
pub struct SelectionStore {
    inner: RwSignal<SelectionSet>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            inner: RwSignal::new(SelectionSet::default()),
        }
    }

    pub fn select(&self, asset: Asset) {
        self.inner.update(|s| s.select(asset));
    }

    pub fn deselect(&self, id: &str) {
        self.inner.update(|s| s.deselect(id));
    }

    /// Upsert every asset in `assets`, one `select` at a time.
    pub fn select_all(&self, assets: impl IntoIterator<Item = Asset>) {
        self.inner.update(|s| {
            for asset in assets {
                s.select(asset);
            }
        });
    }

    pub fn clear(&self) {
        self.inner.update(SelectionSet::clear);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.inner.with(|s| s.is_selected(id))
    }

    pub fn len(&self) -> usize {
        self.inner.with(SelectionSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.with(SelectionSet::is_empty)
    }

    pub fn selected_assets(&self) -> Vec<Asset> {
        self.inner.with(SelectionSet::assets)
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
