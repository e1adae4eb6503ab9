//! Inventory and equipment resolution for a single actor.
//!
//! `inventory-core` owns the rules: grouped item storage under a carry
//! capacity, equip-slot arbitration with bonus-based tie-breaking, discard
//! protection for unique and irreplaceable items, memoized unique counts, and
//! the canonical listing order. All state mutation flows through
//! [`Inventory`]; external collaborators (the item catalog, the diagnostics
//! channel) are traits implemented by host crates.
pub mod catalog;
pub mod config;
pub mod diag;
pub mod error;
pub mod inventory;
pub mod item;
pub mod save;

pub use catalog::CatalogOracle;
pub use config::InventoryConfig;
pub use diag::{CollectingSink, DiagnosticsSink, NullSink};
pub use error::InventoryWarning;
pub use inventory::{Inventory, compare_items};
pub use item::{
    DefinitionId, DiscardRule, InstanceId, Item, ItemDefinition, ItemType, TypeCaps,
};
pub use save::{SaveRecords, SavedItem};
