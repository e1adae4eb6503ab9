//! Host-side glue for the inventory engine.
//!
//! Implements the core's collaborator traits for a running game: an
//! in-memory catalog oracle fed by content loaders, a tracing-backed
//! diagnostics sink, and save-slot repositories for persisted inventory
//! records.

pub mod diagnostics;
pub mod oracle;
pub mod repository;

pub use diagnostics::TracingSink;
pub use oracle::{CatalogStore, load_catalog};
pub use repository::{InMemorySaveRepo, RepositoryError, SaveRepository};
