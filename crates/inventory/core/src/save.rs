//! Load/save boundary: persisted records and catalog-backed hydration.
//!
//! The persistence framework stores one record per held item, grouped by
//! category. Hydration consults the catalog collaborator for each record and
//! silently drops ids the catalog no longer knows, so stale saves degrade to
//! a smaller inventory instead of failing.

use std::collections::BTreeMap;

use crate::catalog::CatalogOracle;
use crate::inventory::Inventory;
use crate::item::{DefinitionId, ItemType};

/// One persisted item: its definition id and whether the actor carried it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedItem {
    pub id: DefinitionId,
    pub carried: bool,
}

/// Saved inventory contents, grouped by item category.
pub type SaveRecords = BTreeMap<ItemType, Vec<SavedItem>>;

impl Inventory {
    /// Rebuilds contents from saved records.
    ///
    /// Each record's definition id is looked up in the catalog; hits are
    /// instantiated with a fresh instance id, given the saved `carried` flag,
    /// and fed through [`Inventory::add`] so capacity and auto-equip rules
    /// apply. Records with unknown ids are dropped without error.
    pub fn hydrate<C>(&mut self, records: &SaveRecords, catalog: &C)
    where
        C: CatalogOracle + ?Sized,
    {
        for saved in records.values().flatten() {
            let Some(definition) = catalog.definition(saved.id) else {
                continue;
            };
            let instance = self.allocate_instance_id();
            let item = definition.instantiate(instance);
            self.add(item, saved.carried);
        }
    }

    /// Captures current contents as records, grouped by category in bucket
    /// order.
    pub fn to_records(&self) -> SaveRecords {
        let mut records = SaveRecords::new();
        for item in self.iter() {
            records.entry(item.kind).or_default().push(SavedItem {
                id: item.definition,
                carried: item.carried,
            });
        }
        records
    }
}
