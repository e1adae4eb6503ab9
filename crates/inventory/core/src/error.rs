//! Warning taxonomy for the inventory aggregate.
//!
//! Every failure mode is non-fatal and locally absorbed: the operation
//! becomes a no-op and one warning is pushed through the injected
//! [`crate::diag::DiagnosticsSink`]. Nothing here ever propagates as a hard
//! error to the caller, preserving game-loop continuity.

use crate::item::{DefinitionId, InstanceId};

/// Non-fatal condition reported by an inventory operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryWarning {
    /// Add rejected: the per-definition count would exceed the configured
    /// capacity.
    #[error("bag is full: cannot add another item {id} (capacity {capacity})")]
    CapacityExceeded { id: DefinitionId, capacity: i32 },

    /// Discard rejected by the per-category policy.
    #[error("item {id} is not discardable")]
    NotDiscardable { id: DefinitionId },

    /// Discard target not present in any bucket.
    #[error("no item {id} held")]
    NotFound { id: DefinitionId },

    /// Remove target not present in any bucket.
    #[error("no item instance {instance} held")]
    InstanceNotFound { instance: InstanceId },
}
