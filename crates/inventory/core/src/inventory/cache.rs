//! Memoized per-definition counts.
//!
//! Two views are kept: all items, and carried items only. Both maps are
//! rebuilt together by a single scan and cleared together by every
//! structural mutation. An explicit dirty flag distinguishes an invalidated
//! cache from a genuinely empty inventory.

use std::collections::HashMap;

use crate::item::{DefinitionId, Item};

use super::Inventory;

#[derive(Debug)]
pub(super) struct UniqueCounts {
    all: HashMap<DefinitionId, u32>,
    carried: HashMap<DefinitionId, u32>,
    dirty: bool,
}

impl UniqueCounts {
    pub(super) fn new() -> Self {
        Self {
            all: HashMap::new(),
            carried: HashMap::new(),
            dirty: true,
        }
    }

    pub(super) fn invalidate(&mut self) {
        self.all.clear();
        self.carried.clear();
        self.dirty = true;
    }
}

impl Inventory {
    /// Count of held instances sharing the item's definition id.
    pub fn count(&mut self, item: &Item, include_not_carried: bool) -> u32 {
        self.count_by_id(item.definition, include_not_carried)
    }

    /// Count of held instances sharing a definition id; 0 for unseen ids.
    ///
    /// Reads lazily rebuild the cache after an invalidation, so the result is
    /// always consistent with a fresh scan of the buckets.
    pub fn count_by_id(&mut self, id: DefinitionId, include_not_carried: bool) -> u32 {
        self.ensure_counts();
        let map = if include_not_carried {
            &self.counts.all
        } else {
            &self.counts.carried
        };
        map.get(&id).copied().unwrap_or(0)
    }

    pub(super) fn invalidate_counts(&mut self) {
        self.counts.invalidate();
    }

    /// Rebuilds both count maps in one pass when the cache is dirty.
    pub(super) fn ensure_counts(&mut self) {
        if !self.counts.dirty {
            return;
        }
        self.counts.all.clear();
        self.counts.carried.clear();
        for item in self.buckets.iter().flatten() {
            *self.counts.all.entry(item.definition).or_insert(0) += 1;
            if item.carried {
                *self.counts.carried.entry(item.definition).or_insert(0) += 1;
            }
        }
        self.counts.dirty = false;
    }
}
