//! Seeder: populates the document store from the static default content.
//!
//! The write path is the mirror image of the resolver's read path: reads
//! degrade gracefully to defaults, writes fail loudly. A failed write stops
//! the batch and names the category that failed.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::defaults;
use crate::models::{CategoryId, MAIN_DOC_ID};
use crate::store::{DocumentStore, StoreError};

/// A store failure tied to the category being written or cleared.
#[derive(Debug)]
pub struct SeedError {
    pub category: CategoryId,
    pub source: StoreError,
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category {}: {}", self.category, self.source)
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Outcome of `clear_all`: failures are collected, not fatal.
#[derive(Debug, Default)]
pub struct ClearReport {
    pub cleared: usize,
    pub failures: Vec<SeedError>,
}

impl ClearReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Batch writer of default content into the document store.
pub struct Seeder {
    store: Arc<dyn DocumentStore>,
}

impl Seeder {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Write the category's default document under the canonical id,
    /// stamping timestamps. Overwrites without guarding; callers wanting
    /// non-destructive behavior check existence first.
    pub async fn seed_category(&self, category: CategoryId) -> Result<(), SeedError> {
        let mut doc = defaults::document(category);
        let now = Utc::now().to_rfc3339();
        if let Some(obj) = doc.as_object_mut() {
            obj.insert("createdAt".to_string(), json!(now));
            obj.insert("updatedAt".to_string(), json!(now));
        }

        self.store
            .put(category.collection(), MAIN_DOC_ID, &doc)
            .await
            .map_err(|source| SeedError { category, source })
    }

    /// Seed every category in the fixed declared order. The progress
    /// callback receives `(completed, total, label)` before each step and
    /// once more at completion. The first failure aborts the batch.
    pub async fn seed_all<F>(&self, mut on_progress: F) -> Result<(), SeedError>
    where
        F: FnMut(usize, usize, &str),
    {
        let total = CategoryId::ALL.len();
        for (completed, category) in CategoryId::ALL.into_iter().enumerate() {
            on_progress(completed, total, category.label());
            tracing::info!(category = %category, completed, total, "seeding");
            self.seed_category(category).await?;
        }
        on_progress(total, total, "Complete");
        tracing::info!(total, "seeding complete");
        Ok(())
    }

    /// Delete every document in the category's collection. Returns the
    /// number of deleted documents.
    pub async fn clear_category(&self, category: CategoryId) -> Result<usize, SeedError> {
        let collection = category.collection();
        let ids = self
            .store
            .list_ids(collection)
            .await
            .map_err(|source| SeedError { category, source })?;

        for id in &ids {
            self.store
                .delete(collection, id)
                .await
                .map_err(|source| SeedError { category, source })?;
        }

        tracing::info!(category = %category, count = ids.len(), "cleared");
        Ok(ids.len())
    }

    /// Clear every category, collecting failures instead of aborting. No
    /// cross-category atomicity.
    pub async fn clear_all(&self) -> ClearReport {
        let mut report = ClearReport::default();
        for category in CategoryId::ALL {
            match self.clear_category(category).await {
                Ok(n) => report.cleared += n,
                Err(err) => {
                    tracing::error!(category = %err.category, error = %err.source, "clear failed");
                    report.failures.push(err);
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use serde_json::Value;

    /// Store that rejects writes to one collection and delegates the rest.
    struct FlakyStore {
        inner: MemoryStore,
        fail_collection: &'static str,
    }

    #[async_trait]
    impl DocumentStore for FlakyStore {
        async fn get(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
            self.inner.get(collection, id).await
        }
        async fn put(&self, collection: &str, id: &str, doc: &Value) -> Result<(), StoreError> {
            if collection == self.fail_collection {
                return Err(StoreError::Unavailable("disk full".to_string()));
            }
            self.inner.put(collection, id, doc).await
        }
        async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
            if collection == self.fail_collection {
                return Err(StoreError::Unavailable("disk full".to_string()));
            }
            self.inner.delete(collection, id).await
        }
        async fn list_ids(&self, collection: &str) -> Result<Vec<String>, StoreError> {
            self.inner.list_ids(collection).await
        }
    }

    #[tokio::test]
    async fn test_seed_category_writes_defaults_with_timestamps() {
        let store = Arc::new(MemoryStore::new());
        let seeder = Seeder::new(store.clone());

        seeder.seed_category(CategoryId::SiteInfo).await.unwrap();

        let doc = store.get("siteInfo", MAIN_DOC_ID).await.unwrap();
        assert_eq!(doc["name"], "Riverside Community Service Center");
        assert!(doc["createdAt"].is_string());
        assert!(doc["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_seed_category_is_idempotent_overwrite() {
        let store = Arc::new(MemoryStore::new());
        let seeder = Seeder::new(store.clone());

        seeder.seed_category(CategoryId::Team).await.unwrap();
        seeder.seed_category(CategoryId::Team).await.unwrap();

        let ids = store.list_ids("team").await.unwrap();
        assert_eq!(ids, vec![MAIN_DOC_ID]);

        let doc = store.get("team", MAIN_DOC_ID).await.unwrap();
        let expected = serde_json::to_value(crate::defaults::team()).unwrap();
        assert_eq!(doc["members"], expected["members"]);
    }

    #[tokio::test]
    async fn test_seed_all_reports_progress_in_order() {
        let store = Arc::new(MemoryStore::new());
        let seeder = Seeder::new(store.clone());

        let mut calls = Vec::new();
        seeder
            .seed_all(|completed, total, label| calls.push((completed, total, label.to_string())))
            .await
            .unwrap();

        // One call per category plus the completion call.
        assert_eq!(calls.len(), CategoryId::ALL.len() + 1);
        assert_eq!(calls[0], (0, 7, CategoryId::SiteInfo.label().to_string()));
        assert_eq!(calls.last().unwrap(), &(7, 7, "Complete".to_string()));

        for cat in CategoryId::ALL {
            assert!(store.get(cat.collection(), MAIN_DOC_ID).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_seed_all_halts_on_first_failure() {
        // Third category in the fixed order is "programs".
        let store = Arc::new(FlakyStore {
            inner: MemoryStore::new(),
            fail_collection: "programs",
        });
        let seeder = Seeder::new(store.clone());

        let err = seeder.seed_all(|_, _, _| {}).await.unwrap_err();
        assert_eq!(err.category, CategoryId::Programs);

        // Categories before the failure were written.
        assert!(store.get("siteInfo", MAIN_DOC_ID).await.is_ok());
        assert!(store.get("aboutInfo", MAIN_DOC_ID).await.is_ok());
        // Categories after the failure were not.
        for cat in [
            CategoryId::Team,
            CategoryId::Community,
            CategoryId::HomeConfig,
            CategoryId::SiteAssets,
        ] {
            assert_eq!(
                store.get(cat.collection(), MAIN_DOC_ID).await,
                Err(StoreError::NotFound),
                "{} should not have been seeded",
                cat
            );
        }
    }

    #[tokio::test]
    async fn test_clear_category_removes_every_id() {
        let store = Arc::new(MemoryStore::new());
        store
            .put("community", "main", &serde_json::json!({}))
            .await
            .unwrap();
        store
            .put("community", "draft", &serde_json::json!({}))
            .await
            .unwrap();

        let seeder = Seeder::new(store.clone());
        let n = seeder.clear_category(CategoryId::Community).await.unwrap();
        assert_eq!(n, 2);
        assert!(store.list_ids("community").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_all_collects_failures() {
        let store = Arc::new(FlakyStore {
            inner: MemoryStore::new(),
            fail_collection: "team",
        });
        // Something to clear in two collections, one of which fails.
        store
            .inner
            .put("siteInfo", "main", &serde_json::json!({}))
            .await
            .unwrap();
        store
            .inner
            .put("team", "main", &serde_json::json!({}))
            .await
            .unwrap();

        let seeder = Seeder::new(store.clone());
        let report = seeder.clear_all().await;

        assert_eq!(report.cleared, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].category, CategoryId::Team);
    }
}
