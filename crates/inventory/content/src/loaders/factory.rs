//! Content factory for loading inventory data from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all inventory content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load inventory configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<inventory_core::InventoryConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<inventory_core::ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_missing_files_error() {
        let factory = ContentFactory::new("/nonexistent");
        assert!(factory.load_config().is_err());
        assert!(factory.load_items().is_err());
    }
}
