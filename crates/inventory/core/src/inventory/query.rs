//! Lookups, aggregate queries, and the canonical listing order.

use core::cmp::Ordering;
use std::collections::HashSet;

use crate::item::{DefinitionId, InstanceId, Item, ItemType};

use super::Inventory;

/// Canonical ordering used by every listing query: equipped before
/// unequipped, then equippable before non-equippable, then ascending by
/// category, then descending by bonus. Remaining ties are left to the stable
/// sort.
pub fn compare_items(a: &Item, b: &Item) -> Ordering {
    b.equipped
        .cmp(&a.equipped)
        .then_with(|| b.equippable.cmp(&a.equippable))
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| b.bonus.cmp(&a.bonus))
}

impl Inventory {
    /// Flattened, sorted view across all buckets, restricted to carried
    /// items unless `include_not_carried` is set.
    pub fn all(&self, include_not_carried: bool) -> Vec<&Item> {
        let mut items: Vec<&Item> = self
            .iter()
            .filter(|item| include_not_carried || item.carried)
            .collect();
        items.sort_by(|a, b| compare_items(a, b));
        items
    }

    /// One representative instance per distinct definition id, in canonical
    /// order. Repopulates the count cache as a side effect.
    pub fn unique(&mut self, include_not_carried: bool) -> Vec<&Item> {
        self.ensure_counts();

        let mut seen: HashSet<DefinitionId> = HashSet::new();
        let mut representatives: Vec<&Item> = Vec::new();
        for item in self.buckets.iter().flatten() {
            if !include_not_carried && !item.carried {
                continue;
            }
            if seen.insert(item.definition) {
                representatives.push(item);
            }
        }
        representatives.sort_by(|a, b| compare_items(a, b));
        representatives
    }

    /// Currently equipped instances, optionally restricted to one category.
    pub fn equipped(&self, kind: Option<ItemType>) -> Vec<&Item> {
        let mut items: Vec<&Item> = match kind {
            Some(kind) => self.buckets[kind.bucket_index()]
                .iter()
                .filter(|item| item.equipped)
                .collect(),
            None => self.iter().filter(|item| item.equipped).collect(),
        };
        items.sort_by(|a, b| compare_items(a, b));
        items
    }

    /// Bonus of the equipped item of a category, 0 when nothing is equipped.
    pub fn current_bonus(&self, kind: ItemType) -> u32 {
        self.buckets[kind.bucket_index()]
            .iter()
            .find(|item| item.equipped)
            .map(|item| item.bonus)
            .unwrap_or(0)
    }

    /// Strongest item of a category by bonus; first match wins ties.
    pub fn strongest_by_type(&self, kind: ItemType) -> Option<&Item> {
        let mut strongest: Option<&Item> = None;
        for item in &self.buckets[kind.bucket_index()] {
            if strongest.is_none_or(|s| item.bonus > s.bonus) {
                strongest = Some(item);
            }
        }
        strongest
    }

    /// Weakest item of a category by bonus; first match wins ties.
    pub fn weakest_by_type(&self, kind: ItemType) -> Option<&Item> {
        let mut weakest: Option<&Item> = None;
        for item in &self.buckets[kind.bucket_index()] {
            if weakest.is_none_or(|w| item.bonus < w.bonus) {
                weakest = Some(item);
            }
        }
        weakest
    }

    /// Number of instances held in one bucket.
    pub fn count_by_type(&self, kind: ItemType) -> usize {
        self.buckets[kind.bucket_index()].len()
    }

    /// First item matching the definition id, optionally narrowed to a
    /// specific instance.
    pub fn get_item(&self, id: DefinitionId, instance: Option<InstanceId>) -> Option<&Item> {
        self.iter().find(|item| {
            item.definition == id && instance.is_none_or(|wanted| item.instance == wanted)
        })
    }

    /// Another held instance sharing the definition id.
    pub fn similar(&self, item: &Item) -> Option<&Item> {
        self.iter()
            .find(|other| other.instance != item.instance && other.definition == item.definition)
    }

    /// Existence check by display name.
    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|item| item.name == name)
    }

    /// True when acquiring the item would not improve the equipped bonus for
    /// its category.
    pub fn is_item_obsolete(&self, item: &Item) -> bool {
        item.equippable && item.bonus <= self.current_bonus(item.kind)
    }
}
