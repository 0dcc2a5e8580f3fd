// SPDX-License-Identifier: MIT

//! Aggregation endpoints: ranking and summary statistics.

use crate::error::Result;
use crate::models::{Stats, Student};
use crate::routes::ApiResponse;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_RANKING_LIMIT: usize = 5;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/ranking", get(get_ranking))
        .route("/api/stats", get(get_stats))
}

#[derive(Deserialize)]
struct RankingQuery {
    /// Filter by exact category match
    category: Option<String>,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_RANKING_LIMIT
}

#[derive(Serialize)]
pub struct RankingResponse {
    pub students: Vec<Student>,
    /// Count of matching students before truncation to `limit`
    pub total: usize,
}

/// Top students by point total, optionally restricted to one category.
async fn get_ranking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingQuery>,
) -> Result<Json<ApiResponse<RankingResponse>>> {
    let mut students = state.store.load_students().await;
    if let Some(category) = &params.category {
        students.retain(|s| s.category == *category);
    }
    let total = students.len();

    // Stable sort keeps file order for tied totals.
    students.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    students.truncate(params.limit);

    Ok(ApiResponse::data(RankingResponse { students, total }))
}

/// Summary statistics over all three collections.
async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse<Stats>>> {
    let students = state.store.load_students().await;
    let templates = state.store.load_templates().await;
    let awards = state.store.load_awards().await;

    Ok(ApiResponse::data(Stats::collect(
        &students, &templates, &awards,
    )))
}
