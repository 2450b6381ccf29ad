//! Content resolution with static-default fallback.
//!
//! Reads are fail-open: a missing document and a store failure both resolve
//! to the compiled-in default for the category, so the public site degrades
//! to baseline content instead of an error page. The fallback is whole
//! document or nothing; a persisted document is returned verbatim, never
//! merged with defaults field by field.

mod views;

pub use views::*;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::defaults;
use crate::models::{
    AboutInfo, CategoryId, CommunityDoc, DirectorProfile, HomeConfig, ProgramsDoc, SiteAssets,
    SiteInfo, TeamDoc, MAIN_DOC_ID,
};
use crate::store::{DocumentStore, StoreError};

/// Composed view model for the about page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSectionData {
    pub director: DirectorProfile,
    pub history: Vec<HistoryYear>,
    pub advisors: Vec<AdvisorView>,
    pub facilities: Vec<String>,
}

/// Fallback-safe reader over the document store.
pub struct ContentResolver {
    store: Arc<dyn DocumentStore>,
}

impl ContentResolver {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Best-available document for a category: the persisted one if present,
    /// else the static default. Never fails outward.
    pub async fn resolve(&self, category: CategoryId) -> Value {
        match self.store.get(category.collection(), MAIN_DOC_ID).await {
            Ok(doc) => doc,
            Err(StoreError::NotFound) => {
                tracing::debug!(category = %category, "no stored document, using defaults");
                defaults::document(category)
            }
            Err(StoreError::Unavailable(reason)) => {
                tracing::warn!(category = %category, %reason, "store read failed, using defaults");
                defaults::document(category)
            }
        }
    }

    /// Walk the resolved document along `path`; if any segment is absent,
    /// return the supplied default.
    pub async fn resolve_subfield(
        &self,
        category: CategoryId,
        path: &[&str],
        default: Value,
    ) -> Value {
        let mut current = self.resolve(category).await;
        for segment in path {
            match current.get_mut(segment) {
                Some(next) => current = next.take(),
                None => return default,
            }
        }
        current
    }

    /// True when the category has a persisted document. Store failures count
    /// as absent.
    pub async fn exists(&self, category: CategoryId) -> bool {
        match self.store.get(category.collection(), MAIN_DOC_ID).await {
            Ok(_) => true,
            Err(StoreError::NotFound) => false,
            Err(StoreError::Unavailable(reason)) => {
                tracing::warn!(category = %category, %reason, "existence check failed");
                false
            }
        }
    }

    /// True when at least one of the given categories has a persisted
    /// document. An OR across categories, not a per-category map.
    pub async fn exists_any(&self, categories: &[CategoryId]) -> bool {
        for &category in categories {
            if self.exists(category).await {
                return true;
            }
        }
        false
    }

    async fn resolve_typed<T: DeserializeOwned>(
        &self,
        category: CategoryId,
        fallback: fn() -> T,
    ) -> T {
        let doc = self.resolve(category).await;
        match serde_json::from_value(doc) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(category = %category, %err, "stored document does not deserialize, using defaults");
                fallback()
            }
        }
    }

    pub async fn site_info(&self) -> SiteInfo {
        self.resolve_typed(CategoryId::SiteInfo, defaults::site_info)
            .await
    }

    pub async fn about_info(&self) -> AboutInfo {
        self.resolve_typed(CategoryId::AboutInfo, defaults::about_info)
            .await
    }

    pub async fn programs(&self) -> ProgramsDoc {
        self.resolve_typed(CategoryId::Programs, defaults::programs)
            .await
    }

    pub async fn team(&self) -> TeamDoc {
        self.resolve_typed(CategoryId::Team, defaults::team).await
    }

    pub async fn community(&self) -> CommunityDoc {
        self.resolve_typed(CategoryId::Community, defaults::community)
            .await
    }

    pub async fn home_config(&self) -> HomeConfig {
        self.resolve_typed(CategoryId::HomeConfig, defaults::home_config)
            .await
    }

    pub async fn site_assets(&self) -> SiteAssets {
        self.resolve_typed(CategoryId::SiteAssets, defaults::site_assets)
            .await
    }

    /// Every program across all categories as a single ordered list.
    pub async fn all_programs_flattened(&self) -> Vec<FlattenedProgram> {
        let doc = self.programs().await;
        flatten_programs(&doc.categories)
    }

    /// Composed about-page view model: director profile, history timeline,
    /// advisor board, facilities.
    pub async fn about_section_data(&self) -> AboutSectionData {
        let about = self.about_info().await;
        AboutSectionData {
            history: history_timeline(&about.milestones),
            advisors: advisor_board(&about.advisors),
            director: about.director,
            facilities: about.facilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use serde_json::json;

    /// Store where every operation fails with a backend error.
    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn get(&self, _: &str, _: &str) -> Result<Value, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn put(&self, _: &str, _: &str, _: &Value) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn delete(&self, _: &str, _: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
        async fn list_ids(&self, _: &str) -> Result<Vec<String>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_read_failure_equals_absence() {
        let empty = ContentResolver::new(Arc::new(MemoryStore::new()));
        let failing = ContentResolver::new(Arc::new(FailingStore));

        for cat in CategoryId::ALL {
            assert_eq!(
                empty.resolve(cat).await,
                failing.resolve(cat).await,
                "divergence for {}",
                cat
            );
        }
    }

    #[tokio::test]
    async fn test_resolve_prefers_persisted_document() {
        let store = Arc::new(MemoryStore::new());
        store
            .put("siteInfo", MAIN_DOC_ID, &json!({"name": "Edited Center"}))
            .await
            .unwrap();

        let resolver = ContentResolver::new(store);
        let doc = resolver.resolve(CategoryId::SiteInfo).await;
        assert_eq!(doc["name"], "Edited Center");
    }

    #[tokio::test]
    async fn test_persisted_document_is_not_merged_with_defaults() {
        // Whole document or nothing: a saved document missing a field keeps
        // that field absent in the raw resolve.
        let store = Arc::new(MemoryStore::new());
        store
            .put("siteInfo", MAIN_DOC_ID, &json!({"name": "Edited Center"}))
            .await
            .unwrap();

        let resolver = ContentResolver::new(store);
        let doc = resolver.resolve(CategoryId::SiteInfo).await;
        assert!(doc.get("purpose").is_none());

        // The typed accessor fills absent fields with empty values, not with
        // the static default text.
        let info = resolver.site_info().await;
        assert_eq!(info.name, "Edited Center");
        assert_eq!(info.purpose, "");
    }

    #[tokio::test]
    async fn test_resolve_subfield_walks_and_defaults() {
        let store = Arc::new(MemoryStore::new());
        store
            .put(
                "aboutInfo",
                MAIN_DOC_ID,
                &json!({"director": {"name": "Someone Else"}}),
            )
            .await
            .unwrap();

        let resolver = ContentResolver::new(store);
        let name = resolver
            .resolve_subfield(
                CategoryId::AboutInfo,
                &["director", "name"],
                json!("fallback"),
            )
            .await;
        assert_eq!(name, json!("Someone Else"));

        let missing = resolver
            .resolve_subfield(
                CategoryId::AboutInfo,
                &["director", "message", "title"],
                json!("fallback"),
            )
            .await;
        assert_eq!(missing, json!("fallback"));
    }

    #[tokio::test]
    async fn test_exists_any_is_an_or() {
        let store = Arc::new(MemoryStore::new());
        let resolver = ContentResolver::new(store.clone());

        assert!(!resolver.exists_any(&CategoryId::ALL).await);

        store
            .put("team", MAIN_DOC_ID, &json!({"members": []}))
            .await
            .unwrap();
        assert!(resolver.exists_any(&CategoryId::ALL).await);
        assert!(resolver.exists(CategoryId::Team).await);
        assert!(!resolver.exists(CategoryId::SiteInfo).await);
    }

    #[tokio::test]
    async fn test_exists_fails_open_to_absent() {
        let resolver = ContentResolver::new(Arc::new(FailingStore));
        assert!(!resolver.exists_any(&CategoryId::ALL).await);
    }

    #[tokio::test]
    async fn test_typed_accessor_falls_back_on_malformed_document() {
        let store = Arc::new(MemoryStore::new());
        // An array where an object is required.
        store
            .put("siteInfo", MAIN_DOC_ID, &json!([1, 2, 3]))
            .await
            .unwrap();

        let resolver = ContentResolver::new(store);
        let info = resolver.site_info().await;
        assert_eq!(info, crate::defaults::site_info());
    }

    #[tokio::test]
    async fn test_about_section_data_composition() {
        let resolver = ContentResolver::new(Arc::new(MemoryStore::new()));
        let data = resolver.about_section_data().await;

        assert_eq!(data.director.name, "Dr. Miriam Hale");
        assert!(!data.history.is_empty());
        // Years descending.
        let years: Vec<i32> = data
            .history
            .iter()
            .map(|y| y.year.parse().unwrap())
            .collect();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
        // Advisors in display order.
        let orders: Vec<i64> = data.advisors.iter().map(|a| a.advisor.order).collect();
        let mut expected = orders.clone();
        expected.sort();
        assert_eq!(orders, expected);
    }
}
