//! Admin endpoints: seeding, clearing, and full-document overwrites.
//!
//! These sit behind the PSK layer and fail loudly: a write error stops the
//! operation and names the failing category.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use super::{category_from_slug, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CategoryId, MAIN_DOC_ID};
use crate::AppState;

/// Per-category existence map for the admin dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub categories: BTreeMap<String, bool>,
    pub any: bool,
}

/// GET /api/admin/status - Which categories have persisted documents.
pub async fn admin_status(State(state): State<AppState>) -> ApiResult<StatusResponse> {
    let mut categories = BTreeMap::new();
    for cat in CategoryId::ALL {
        categories.insert(cat.slug().to_string(), state.resolver.exists(cat).await);
    }
    let any = categories.values().any(|&b| b);
    success(StatusResponse { categories, any })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub seeded: usize,
    pub total: usize,
}

/// POST /api/admin/seed - Seed every category from defaults.
pub async fn seed_all(State(state): State<AppState>) -> ApiResult<SeedSummary> {
    let total = CategoryId::ALL.len();
    state
        .seeder
        .seed_all(|completed, total, label| {
            tracing::info!(completed, total, label, "seed progress");
        })
        .await?;

    success(SeedSummary {
        seeded: total,
        total,
    })
}

/// POST /api/admin/seed/{category} - Seed one category from defaults.
pub async fn seed_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<SeedSummary> {
    let category = category_from_slug(&slug)?;
    state.seeder.seed_category(category).await?;
    success(SeedSummary {
        seeded: 1,
        total: 1,
    })
}

/// PUT /api/admin/content/{category} - Full-document overwrite.
///
/// No partial patch semantics: the stored document becomes exactly the
/// request body plus an updated timestamp.
pub async fn put_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(mut doc): Json<Value>,
) -> ApiResult<Value> {
    let category = category_from_slug(&slug)?;

    let Some(obj) = doc.as_object_mut() else {
        return Err(AppError::Validation(
            "Document body must be a JSON object".to_string(),
        ));
    };
    obj.insert("updatedAt".to_string(), json!(Utc::now().to_rfc3339()));

    state
        .store
        .put(category.collection(), MAIN_DOC_ID, &doc)
        .await?;

    success(doc)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearSummary {
    pub cleared: usize,
    pub failures: Vec<ClearFailure>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearFailure {
    pub category: String,
    pub message: String,
}

/// DELETE /api/admin/content/{category} - Clear one category.
pub async fn clear_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<ClearSummary> {
    let category = category_from_slug(&slug)?;
    let cleared = state.seeder.clear_category(category).await?;
    success(ClearSummary {
        cleared,
        failures: vec![],
    })
}

/// DELETE /api/admin/content - Clear every category, reporting failures.
pub async fn clear_all(State(state): State<AppState>) -> ApiResult<ClearSummary> {
    let report = state.seeder.clear_all().await;
    success(ClearSummary {
        cleared: report.cleared,
        failures: report
            .failures
            .iter()
            .map(|f| ClearFailure {
                category: f.category.slug().to_string(),
                message: f.source.to_string(),
            })
            .collect(),
    })
}
