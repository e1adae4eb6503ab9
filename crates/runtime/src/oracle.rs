//! Minimal [`inventory_core::CatalogOracle`] backed by an in-memory map.

use std::collections::HashMap;
use std::path::Path;

use inventory_core::{CatalogOracle, DefinitionId, ItemDefinition};
use inventory_content::ContentFactory;

/// Catalog oracle with static item definitions.
pub struct CatalogStore {
    definitions: HashMap<DefinitionId, ItemDefinition>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Add an item definition, replacing any previous entry for its id.
    pub fn add_definition(&mut self, definition: ItemDefinition) {
        self.definitions.insert(definition.id, definition);
    }

    /// Build a store from loaded definitions.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut store = Self::new();
        for definition in definitions {
            store.add_definition(definition);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogOracle for CatalogStore {
    fn definition(&self, id: DefinitionId) -> Option<ItemDefinition> {
        self.definitions.get(&id).cloned()
    }
}

/// Build a catalog store from `items.ron` in the given data directory.
pub fn load_catalog(data_dir: impl AsRef<Path>) -> anyhow::Result<CatalogStore> {
    let factory = ContentFactory::new(data_dir.as_ref());
    let definitions = factory.load_items()?;
    tracing::debug!(
        "Loaded {} item definitions from {}",
        definitions.len(),
        factory.data_dir().display()
    );
    Ok(CatalogStore::from_definitions(definitions))
}
