// SPDX-License-Identifier: MIT

//! Activity catalog endpoints (reusable award templates).

use crate::db::next_id;
use crate::error::{AppError, Result};
use crate::models::{ActivityTemplate, POINTS_MAX, POINTS_MIN};
use crate::routes::{parse_id, ApiResponse};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/created-activities",
            get(list_templates).post(create_template),
        )
        .route("/api/created-activities/{id}", delete(delete_template))
}

/// List all activity templates in file order.
async fn list_templates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ActivityTemplate>>>> {
    let templates = state.store.load_templates().await;
    Ok(ApiResponse::data(templates))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTemplateRequest {
    #[serde(default)]
    name: String,
    default_points: Option<i64>,
    #[serde(default)]
    description: String,
}

/// Add a template to the catalog.
async fn create_template(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ActivityTemplate>>)> {
    let name = req.name.trim().to_string();
    let default_points = match (name.is_empty(), req.default_points) {
        (false, Some(points)) => points,
        _ => {
            return Err(AppError::BadRequest(
                "Fields 'name' and 'defaultPoints' are required".to_string(),
            ))
        }
    };
    if !(POINTS_MIN..=POINTS_MAX).contains(&default_points) {
        return Err(AppError::BadRequest(format!(
            "'defaultPoints' must be between {} and {}",
            POINTS_MIN, POINTS_MAX
        )));
    }

    let mut templates = state.store.load_templates().await;

    let lowered = name.to_lowercase();
    if templates.iter().any(|t| t.name.to_lowercase() == lowered) {
        return Err(AppError::Conflict(format!(
            "An activity named '{}' already exists",
            name
        )));
    }

    let template = ActivityTemplate {
        id: next_id(templates.iter().map(|t| t.id)),
        name,
        default_points,
        description: req.description,
        created_at: now_rfc3339(),
    };
    templates.push(template.clone());
    state.store.save_templates(&templates).await?;

    tracing::info!(id = template.id, name = %template.name, "Activity template created");

    Ok((StatusCode::CREATED, ApiResponse::data(template)))
}

/// Remove a template by id. Past awards that reference it are kept as-is.
async fn delete_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let id = parse_id(&id)?;
    let mut templates = state.store.load_templates().await;
    let before = templates.len();
    templates.retain(|t| t.id != id);
    if templates.len() == before {
        return Err(AppError::NotFound(format!(
            "Activity template {} not found",
            id
        )));
    }
    state.store.save_templates(&templates).await?;

    tracing::info!(id, "Activity template deleted");

    Ok(ApiResponse::message("Activity template deleted"))
}
