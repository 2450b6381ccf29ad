//! Document store seam.
//!
//! The rest of the crate only sees `DocumentStore`: JSON documents addressed
//! by `(collection, doc_id)`. The production implementation is SQLite; tests
//! and ephemeral dev runs use the in-memory store.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{init_database, SqliteStore};

use async_trait::async_trait;
use serde_json::Value;

/// Store-level error taxonomy.
///
/// Read paths treat both variants the same (fall back to defaults); write
/// paths propagate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Document absent. Expected, not exceptional.
    NotFound,
    /// Backend failure (connection, I/O, permission).
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "document not found"),
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Async key-value document store over JSON bodies.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document.
    async fn get(&self, collection: &str, id: &str) -> Result<Value, StoreError>;

    /// Write a document, overwriting any existing one.
    async fn put(&self, collection: &str, id: &str, doc: &Value) -> Result<(), StoreError>;

    /// Delete a document. Deleting an absent document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// List all document ids in a collection.
    async fn list_ids(&self, collection: &str) -> Result<Vec<String>, StoreError>;
}
