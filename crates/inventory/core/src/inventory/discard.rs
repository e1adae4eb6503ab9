//! Discard protection and bulk discard.
//!
//! Whether an item may be shed is decided in two layers: the per-category
//! rule from the capability table, and an instance-level exception that lets
//! duplicates go even when the category protects the last copy.

use crate::error::InventoryWarning;
use crate::item::{DefinitionId, DiscardRule, Item};

use super::Inventory;

impl Inventory {
    /// Category-level policy: may every copy of this item be discarded?
    ///
    /// Bags are protected while they are the strongest bag held (compared by
    /// definition id); unique equipment is never discardable wholesale; all
    /// other categories are unrestricted.
    pub fn is_items_discardable(&self, item: &Item) -> bool {
        match item.caps().discard_rule {
            DiscardRule::Free => true,
            DiscardRule::Never => false,
            DiscardRule::KeepStrongest => self
                .strongest_by_type(item.kind)
                .is_none_or(|strongest| strongest.definition != item.definition),
        }
    }

    /// Instance-level policy: the category rule, or a duplicate exists (by
    /// carried-inclusive count) so one copy can always be shed.
    pub fn is_item_discardable(&mut self, item: &Item) -> bool {
        self.is_items_discardable(item) || self.count(item, true) > 1
    }

    /// Discards one instance matching the definition id (first match found).
    ///
    /// Warns and no-ops when nothing matches or the policy forbids it. If the
    /// discarded instance was equipped, a similar item is equipped in its
    /// place.
    pub fn discard_item(&mut self, id: DefinitionId) {
        let Some(item) = self.get_item(id, None).cloned() else {
            self.warn(InventoryWarning::NotFound { id });
            return;
        };
        if !self.is_item_discardable(&item) {
            self.warn(InventoryWarning::NotDiscardable { id });
            return;
        }

        self.remove(item.instance);
    }

    /// Discards matching instances down to one copy when the category rule
    /// protects the last, otherwise down to zero.
    pub fn discard_items(&mut self, id: DefinitionId) {
        let Some(item) = self.get_item(id, None).cloned() else {
            self.warn(InventoryWarning::NotFound { id });
            return;
        };
        let target = if self.is_items_discardable(&item) { 0 } else { 1 };

        while self.count_by_id(id, true) > target {
            let before = self.count_by_id(id, true);
            self.discard_item(id);
            // Bail once a discard stops making progress.
            if self.count_by_id(id, true) == before {
                break;
            }
        }
    }
}
