//! Public content endpoints.
//!
//! Everything here reads through the resolver, so a broken or empty store
//! still answers 200 with default content.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{category_from_slug, success, ApiResult};
use crate::content::{
    category_counts, filter_by_category, news_by_year, AboutSectionData, FlattenedProgram,
    YearGroups, ALL_CATEGORIES,
};
use crate::models::CommunityNewsItem;
use crate::AppState;

/// GET /api/content/{category} - Resolved raw document for a category.
pub async fn get_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Value> {
    let category = category_from_slug(&slug)?;
    success(state.resolver.resolve(category).await)
}

/// GET /api/content/programs/flattened - Every program as one ordered list.
pub async fn get_programs_flattened(
    State(state): State<AppState>,
) -> ApiResult<Vec<FlattenedProgram>> {
    success(state.resolver.all_programs_flattened().await)
}

/// GET /api/content/about/sections - Composed about-page view model.
pub async fn get_about_sections(State(state): State<AppState>) -> ApiResult<AboutSectionData> {
    success(state.resolver.about_section_data().await)
}

#[derive(Debug, Deserialize)]
pub struct CommunityQuery {
    pub category: Option<String>,
}

/// Filtered and year-grouped news for the community page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityView {
    pub items: Vec<CommunityNewsItem>,
    pub grouped: YearGroups<CommunityNewsItem>,
    pub counts: BTreeMap<String, usize>,
    pub total: usize,
}

/// GET /api/content/community/view?category=tok - Community page view model.
pub async fn get_community_view(
    State(state): State<AppState>,
    Query(query): Query<CommunityQuery>,
) -> ApiResult<CommunityView> {
    let doc = state.resolver.community().await;
    let token = query.category.as_deref().unwrap_or(ALL_CATEGORIES);

    let items = filter_by_category(&doc.items, token);
    let grouped = news_by_year(&items);
    let counts = category_counts(&doc.items);
    let total = doc.items.len();

    success(CommunityView {
        items,
        grouped,
        counts,
        total,
    })
}
