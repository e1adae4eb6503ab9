//! Inventory aggregate for a single actor.
//!
//! Owns the per-category item buckets and enforces the carry-capacity limit.
//! Equip resolution, discard protection, the unique-count cache, and queries
//! live in the sibling modules; every structural mutation funnels through
//! here and invalidates the cache before returning.

mod cache;
mod discard;
mod equip;
mod query;

pub use query::compare_items;

use std::sync::Arc;

use strum::{EnumCount, IntoEnumIterator};

use crate::config::InventoryConfig;
use crate::diag::{DiagnosticsSink, NullSink};
use crate::error::InventoryWarning;
use crate::item::{InstanceId, Item, ItemType};

use cache::UniqueCounts;

/// Mutable inventory state for one actor.
///
/// Items are grouped in insertion-ordered buckets indexed by [`ItemType`].
/// The aggregate is single-threaded and synchronous: every operation runs to
/// completion, and cache invalidation happens before any mutating call
/// returns.
pub struct Inventory {
    buckets: [Vec<Item>; ItemType::COUNT],
    config: InventoryConfig,
    counts: UniqueCounts,
    diagnostics: Arc<dyn DiagnosticsSink>,
    next_instance: u32,
}

impl Inventory {
    /// Creates an inventory with the given configuration and warning sink.
    pub fn new(config: InventoryConfig, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
            config,
            counts: UniqueCounts::new(),
            diagnostics,
            next_instance: 0,
        }
    }

    /// Creates an inventory with the given configuration and no warning sink.
    pub fn with_config(config: InventoryConfig) -> Self {
        Self::new(config, Arc::new(NullSink))
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Iterates every held item in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.buckets.iter().flatten()
    }

    /// Total number of instances held across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Allocates a fresh instance id, never handed out before by this
    /// aggregate. Used when hydrating items from saved records.
    pub fn allocate_instance_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance = self
            .next_instance
            .checked_add(1)
            .expect("InstanceId overflow");
        id
    }

    /// Takes an item into its category bucket.
    ///
    /// Rejects with a [`InventoryWarning::CapacityExceeded`] warning when a
    /// positive capacity is configured and the actor already holds that many
    /// instances of the same definition (carried and stored combined). On
    /// success the item's `carried` flag is set, the count cache is
    /// invalidated, and equippable items go through auto-equip arbitration.
    pub fn add(&mut self, mut item: Item, carried: bool) {
        if !self.config.is_unlimited() {
            let current = self.count_by_id(item.definition, true);
            if current + 1 > self.config.capacity as u32 {
                self.warn(InventoryWarning::CapacityExceeded {
                    id: item.definition,
                    capacity: self.config.capacity,
                });
                return;
            }
        }

        item.carried = carried;
        let instance = item.instance;
        let equippable = item.equippable;

        // Keep the allocator ahead of externally created instances.
        self.next_instance = self.next_instance.max(instance.0.saturating_add(1));

        self.buckets[item.kind.bucket_index()].push(item);
        self.invalidate_counts();

        if equippable {
            self.auto_equip(instance);
        }
    }

    /// Removes one instance from its bucket.
    ///
    /// Warns and no-ops when the instance is not held. If the removed item
    /// was equipped, a similar item (same definition, different instance) is
    /// equipped as replacement.
    pub fn remove(&mut self, instance: InstanceId) {
        let Some((kind, index)) = self.locate(instance) else {
            self.warn(InventoryWarning::InstanceNotFound { instance });
            return;
        };

        let removed = self.buckets[kind.bucket_index()].remove(index);
        self.invalidate_counts();

        if removed.equipped {
            if let Some(next) = self.similar(&removed).map(|item| item.instance) {
                self.equip(next);
            }
        }
    }

    /// Finds the bucket and position holding an instance.
    fn locate(&self, instance: InstanceId) -> Option<(ItemType, usize)> {
        for kind in ItemType::iter() {
            let bucket = &self.buckets[kind.bucket_index()];
            if let Some(index) = bucket.iter().position(|item| item.instance == instance) {
                return Some((kind, index));
            }
        }
        None
    }

    fn warn(&self, warning: InventoryWarning) {
        self.diagnostics.warn(&warning);
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_config(InventoryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::item::DefinitionId;

    fn weapon(definition: u32, instance: u32, bonus: u32) -> Item {
        Item::new(
            DefinitionId(definition),
            InstanceId(instance),
            ItemType::Weapon,
            "pipe",
            true,
            bonus,
        )
    }

    #[test]
    fn add_sets_carried_flag() {
        let mut inventory = Inventory::default();
        inventory.add(weapon(1, 1, 5), false);
        inventory.add(weapon(2, 2, 3), true);

        assert!(!inventory.get_item(DefinitionId(1), None).unwrap().carried);
        assert!(inventory.get_item(DefinitionId(2), None).unwrap().carried);
    }

    #[test]
    fn capacity_rejects_second_copy() {
        // Scenario: capacity 1, two adds sharing a definition id.
        let sink = Arc::new(CollectingSink::new());
        let mut inventory = Inventory::new(InventoryConfig::with_capacity(1), sink.clone());

        inventory.add(weapon(1, 1, 5), true);
        inventory.add(weapon(1, 2, 5), true);

        assert_eq!(inventory.len(), 1);
        assert_eq!(
            inventory.get_item(DefinitionId(1), None).unwrap().instance,
            InstanceId(1)
        );
        assert_eq!(
            sink.take(),
            vec![InventoryWarning::CapacityExceeded {
                id: DefinitionId(1),
                capacity: 1,
            }]
        );
    }

    #[test]
    fn capacity_counts_stored_items_too() {
        let mut inventory = Inventory::with_config(InventoryConfig::with_capacity(2));
        inventory.add(weapon(1, 1, 5), false);
        inventory.add(weapon(1, 2, 5), true);
        inventory.add(weapon(1, 3, 5), true);

        assert_eq!(inventory.count_by_id(DefinitionId(1), true), 2);
    }

    #[test]
    fn capacity_never_exceeded_over_add_sequence() {
        let mut inventory = Inventory::with_config(InventoryConfig::with_capacity(3));
        for instance in 0..10 {
            inventory.add(weapon(1, instance, 5), instance % 2 == 0);
            assert!(inventory.count_by_id(DefinitionId(1), true) <= 3);
        }
        assert_eq!(inventory.count_by_id(DefinitionId(1), true), 3);
    }

    #[test]
    fn remove_unknown_instance_warns() {
        let sink = Arc::new(CollectingSink::new());
        let mut inventory = Inventory::new(InventoryConfig::default(), sink.clone());

        inventory.remove(InstanceId(9));

        assert_eq!(
            sink.take(),
            vec![InventoryWarning::InstanceNotFound {
                instance: InstanceId(9),
            }]
        );
    }

    #[test]
    fn removing_equipped_item_equips_sibling() {
        let mut inventory = Inventory::default();
        inventory.add(weapon(1, 1, 5), true);
        inventory.add(weapon(1, 2, 5), true);

        // Tie favors the incumbent: instance 1 is the equipped copy.
        assert!(inventory.get_item(DefinitionId(1), Some(InstanceId(1))).unwrap().equipped);

        inventory.remove(InstanceId(1));

        let sibling = inventory.get_item(DefinitionId(1), None).unwrap();
        assert_eq!(sibling.instance, InstanceId(2));
        assert!(sibling.equipped);
    }

    #[test]
    fn removing_unequipped_item_leaves_equipment_alone() {
        let mut inventory = Inventory::default();
        inventory.add(weapon(1, 1, 7), true);
        inventory.add(weapon(2, 2, 3), true);

        inventory.remove(InstanceId(2));

        assert!(inventory.get_item(DefinitionId(1), None).unwrap().equipped);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn allocator_stays_ahead_of_external_instances() {
        let mut inventory = Inventory::default();
        inventory.add(weapon(1, 10, 5), true);

        assert!(inventory.allocate_instance_id() > InstanceId(10));
    }
}
