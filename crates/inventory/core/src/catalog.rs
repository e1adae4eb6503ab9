//! Trait describing the read-only item catalog collaborator.
//!
//! The catalog maps stable definition ids to static item attributes. It is
//! consulted during load-from-save hydration; the aggregate never stores
//! catalog data itself.

use crate::item::{DefinitionId, ItemDefinition};

/// Read-only lookup of static item definitions.
pub trait CatalogOracle: Send + Sync {
    /// Returns the definition for an item kind, or `None` when the catalog
    /// does not know the id.
    fn definition(&self, id: DefinitionId) -> Option<ItemDefinition>;
}
