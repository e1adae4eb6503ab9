//! Item catalog loader.

use std::path::Path;

use inventory_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        Self::parse(&read_file(path)?)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}
