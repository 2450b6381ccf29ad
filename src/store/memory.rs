//! In-memory document store for tests and ephemeral dev runs.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{DocumentStore, StoreError};

/// HashMap-backed store. Whole-document overwrite, last write wins, same as
/// the SQLite implementation.
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<BTreeMap<(String, String), Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        let docs = self.docs.lock().unwrap();
        docs.get(&(collection.to_string(), id.to_string()))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn put(&self, collection: &str, id: &str, doc: &Value) -> Result<(), StoreError> {
        let mut docs = self.docs.lock().unwrap();
        docs.insert((collection.to_string(), id.to_string()), doc.clone());
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut docs = self.docs.lock().unwrap();
        docs.remove(&(collection.to_string(), id.to_string()));
        Ok(())
    }

    async fn list_ids(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        let docs = self.docs.lock().unwrap();
        Ok(docs
            .keys()
            .filter(|(c, _)| c == collection)
            .map(|(_, id)| id.clone())
            .collect())
    }
}
