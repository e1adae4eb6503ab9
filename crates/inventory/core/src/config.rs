/// Inventory configuration.
///
/// The single recognized option is `capacity`: the maximum number of
/// instances sharing one definition id that the actor may hold, counted over
/// carried and stored items combined. Zero or negative means unlimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    pub capacity: i32,
}

impl InventoryConfig {
    /// Default capacity: unlimited.
    pub const DEFAULT_CAPACITY: i32 = -1;

    pub fn new() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    pub fn with_capacity(capacity: i32) -> Self {
        Self { capacity }
    }

    /// True when no per-definition limit applies.
    pub fn is_unlimited(&self) -> bool {
        self.capacity <= 0
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
