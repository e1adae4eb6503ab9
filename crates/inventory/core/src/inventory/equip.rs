//! Equip and unequip state transitions.
//!
//! Items move `unequipped -> equipped -> unequipped` with no intermediate
//! states. Conflicts only arise within one category bucket; a pair of
//! multi-equippable items never conflicts. Every transition invalidates the
//! unique-count cache.

use crate::item::InstanceId;

use super::Inventory;

impl Inventory {
    /// Equips the item if it beats every currently equipped conflict in its
    /// bucket.
    ///
    /// Each equipped conflict is compared by bonus: an incumbent with a bonus
    /// greater than or equal to the newcomer's stays equipped and blocks the
    /// newcomer (ties favor the incumbent); weaker incumbents are unequipped.
    /// A blocked or non-equippable newcomer ends with `equipped` explicitly
    /// false.
    pub fn auto_equip(&mut self, instance: InstanceId) {
        let Some((kind, index)) = self.locate(instance) else {
            return;
        };
        let bucket_index = kind.bucket_index();
        let challenger_bonus = self.buckets[bucket_index][index].bonus;
        let challenger_multi = self.buckets[bucket_index][index].is_multi_equippable();
        let mut should_equip = self.buckets[bucket_index][index].equippable;

        if should_equip {
            for i in 0..self.buckets[bucket_index].len() {
                let existing = &self.buckets[bucket_index][i];
                if existing.instance == instance {
                    continue;
                }
                if !existing.equipped || (existing.is_multi_equippable() && challenger_multi) {
                    continue;
                }
                if existing.bonus >= challenger_bonus {
                    should_equip = false;
                } else if !existing.is_multi_equippable() {
                    self.buckets[bucket_index][i].equipped = false;
                }
            }
        }

        if should_equip {
            self.equip(instance);
        } else {
            self.buckets[bucket_index][index].equipped = false;
            self.invalidate_counts();
        }
    }

    /// Equips the item regardless of bonus comparison.
    ///
    /// Unequips every other equipped item in the same bucket first, except
    /// pairs that are mutually multi-equippable, then marks this item
    /// equipped (if it is equippable at all).
    pub fn equip(&mut self, instance: InstanceId) {
        let Some((kind, index)) = self.locate(instance) else {
            return;
        };
        let bucket_index = kind.bucket_index();

        if self.buckets[bucket_index][index].equippable {
            let challenger_multi = self.buckets[bucket_index][index].is_multi_equippable();
            for i in 0..self.buckets[bucket_index].len() {
                let existing = &self.buckets[bucket_index][i];
                if existing.instance == instance {
                    continue;
                }
                if !existing.equipped || (existing.is_multi_equippable() && challenger_multi) {
                    continue;
                }
                if !existing.is_multi_equippable() {
                    self.buckets[bucket_index][i].equipped = false;
                }
            }
            self.buckets[bucket_index][index].equipped = true;
        }

        self.invalidate_counts();
    }

    /// Unequips the item.
    ///
    /// Multi-equippable categories are exempt: their items only leave the
    /// equipped set when a conflicting item replaces them.
    pub fn unequip(&mut self, instance: InstanceId) {
        let Some((kind, index)) = self.locate(instance) else {
            return;
        };
        if kind.caps().multi_equippable {
            return;
        }

        self.buckets[kind.bucket_index()][index].equipped = false;
        self.invalidate_counts();
    }
}
