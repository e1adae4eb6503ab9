//! Save-slot persistence for inventory records.
//!
//! Repositories handle data that changes during play. Static catalog content
//! is served by oracles, not repositories.

use std::collections::HashMap;
use std::sync::Mutex;

use inventory_core::SaveRecords;

/// Repository failure modes.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Shared storage was poisoned by a panicking writer.
    #[error("repository storage poisoned")]
    Poisoned,
}

pub type Result<T> = core::result::Result<T, RepositoryError>;

/// Repository for persisted inventory records, indexed by save slot.
pub trait SaveRepository: Send + Sync {
    /// Store records under a slot, replacing any previous save.
    fn save(&self, slot: u64, records: &SaveRecords) -> Result<()>;

    /// Load the records saved under a slot.
    fn load(&self, slot: u64) -> Result<Option<SaveRecords>>;

    /// Check whether a slot holds a save.
    fn exists(&self, slot: u64) -> bool;

    /// Delete the save in a slot, if any.
    fn delete(&self, slot: u64) -> Result<()>;

    /// List all occupied slots.
    fn list_slots(&self) -> Result<Vec<u64>> {
        Ok(vec![])
    }
}

/// In-memory repository, useful for tests and headless runs.
///
/// Thread-safe with interior mutability using Mutex.
pub struct InMemorySaveRepo {
    slots: Mutex<HashMap<u64, SaveRecords>>,
}

impl InMemorySaveRepo {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySaveRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepo {
    fn save(&self, slot: u64, records: &SaveRecords) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| RepositoryError::Poisoned)?;
        slots.insert(slot, records.clone());
        tracing::debug!("Saved inventory records to slot {}", slot);
        Ok(())
    }

    fn load(&self, slot: u64) -> Result<Option<SaveRecords>> {
        let slots = self.slots.lock().map_err(|_| RepositoryError::Poisoned)?;
        Ok(slots.get(&slot).cloned())
    }

    fn exists(&self, slot: u64) -> bool {
        self.slots
            .lock()
            .map(|slots| slots.contains_key(&slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: u64) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| RepositoryError::Poisoned)?;
        if slots.remove(&slot).is_some() {
            tracing::debug!("Deleted save slot {}", slot);
        }
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<u64>> {
        let slots = self.slots.lock().map_err(|_| RepositoryError::Poisoned)?;
        let mut occupied: Vec<u64> = slots.keys().copied().collect();
        occupied.sort_unstable();
        Ok(occupied)
    }
}
