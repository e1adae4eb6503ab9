//! Diagnostics sink that forwards inventory warnings to `tracing`.

use inventory_core::{DiagnosticsSink, InventoryWarning};

/// Forwards every inventory warning to `tracing::warn!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn warn(&self, warning: &InventoryWarning) {
        tracing::warn!("{}", warning);
    }
}
