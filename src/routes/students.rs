// SPDX-License-Identifier: MIT

//! Student registry endpoints.

use crate::db::next_id;
use crate::error::{AppError, Result};
use crate::models::Student;
use crate::routes::{parse_id, ApiResponse};
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{id}",
            put(update_student).delete(delete_student),
        )
}

/// List all students in file order.
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Student>>>> {
    let students = state.store.load_students().await;
    Ok(ApiResponse::data(students))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateStudentRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
}

/// Register a new student with zero points.
async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Student>>)> {
    let name = req.name.trim().to_string();
    let category = req.category.trim().to_string();
    if name.is_empty() || category.is_empty() {
        return Err(AppError::BadRequest(
            "Fields 'name' and 'category' are required".to_string(),
        ));
    }

    let mut students = state.store.load_students().await;

    // Name uniqueness is checked at creation only, case-insensitively.
    let lowered = name.to_lowercase();
    if students.iter().any(|s| s.name.to_lowercase() == lowered) {
        return Err(AppError::Conflict(format!(
            "A student named '{}' already exists",
            name
        )));
    }

    let now = now_rfc3339();
    let student = Student {
        id: next_id(students.iter().map(|s| s.id)),
        name,
        category,
        total_points: 0,
        created_at: now.clone(),
        updated_at: now,
    };
    students.push(student.clone());
    state.store.save_students(&students).await?;

    tracing::info!(id = student.id, name = %student.name, "Student created");

    Ok((StatusCode::CREATED, ApiResponse::data(student)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStudentRequest {
    total_points: Option<i64>,
}

/// Overwrite a student's point total.
async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Json<ApiResponse<Student>>> {
    let id = parse_id(&id)?;
    let mut students = state.store.load_students().await;
    let student = students
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))?;

    if let Some(total_points) = req.total_points {
        student.total_points = total_points;
        student.updated_at = now_rfc3339();
    }
    let updated = student.clone();
    state.store.save_students(&students).await?;

    Ok(ApiResponse::data(updated))
}

/// Remove a student by id, preserving the order of survivors.
async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let id = parse_id(&id)?;
    let mut students = state.store.load_students().await;
    let before = students.len();
    students.retain(|s| s.id != id);
    if students.len() == before {
        return Err(AppError::NotFound(format!("Student {} not found", id)));
    }
    state.store.save_students(&students).await?;

    tracing::info!(id, "Student deleted");

    Ok(ApiResponse::message("Student deleted"))
}
