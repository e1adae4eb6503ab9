//! Data-driven content for the inventory engine.
//!
//! This crate provides loaders that turn RON/TOML data files into catalog
//! definitions and engine configuration:
//! - Item catalogs (data-driven via RON)
//! - Inventory configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in aggregate
//! state. All loaders use inventory-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader};
