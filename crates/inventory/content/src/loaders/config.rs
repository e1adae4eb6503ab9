//! Inventory configuration loader.

use std::path::Path;

use inventory_core::InventoryConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for inventory configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so an empty file yields an
    /// unlimited-capacity configuration.
    pub fn load(path: &Path) -> LoadResult<InventoryConfig> {
        Self::parse(&read_file(path)?)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<InventoryConfig> {
        let config: InventoryConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
