// SPDX-License-Identifier: MIT

//! Award ledger endpoints: the only path, besides the explicit update
//! endpoint, that changes a student's point total.

use crate::db::next_id;
use crate::error::{AppError, Result};
use crate::models::{AwardRecord, Student, POINTS_MAX, POINTS_MIN};
use crate::routes::{parse_id, ApiResponse};
use crate::time_utils::{format_award_date, format_utc_rfc3339};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_awards).post(award_points))
        .route(
            "/api/activities/student/{student_id}",
            get(list_awards_for_student),
        )
}

/// List the full award ledger in file order.
async fn list_awards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<AwardRecord>>>> {
    let awards = state.store.load_awards().await;
    Ok(ApiResponse::data(awards))
}

/// List awards for one student, by exact id match.
async fn list_awards_for_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<AwardRecord>>>> {
    let student_id = parse_id(&student_id)?;
    let awards = state.store.load_awards().await;
    let filtered: Vec<AwardRecord> = awards
        .into_iter()
        .filter(|a| a.student_id == student_id)
        .collect();
    Ok(ApiResponse::data(filtered))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AwardRequest {
    student_id: Option<u64>,
    activity_id: Option<u64>,
    points: Option<i64>,
}

/// Result of awarding points: the ledger entry, the updated student, and
/// whether the award pushed the student over a level boundary.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardOutcome {
    pub award: AwardRecord,
    pub student: Student,
    pub evolved: bool,
    pub new_level: i64,
}

/// Award points to a student for an activity template.
///
/// Referential integrity is checked here only; deleting either side later
/// leaves the ledger entry untouched.
async fn award_points(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AwardRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AwardOutcome>>)> {
    let (student_id, activity_id, points) = match (req.student_id, req.activity_id, req.points) {
        (Some(student_id), Some(activity_id), Some(points)) => (student_id, activity_id, points),
        _ => {
            return Err(AppError::BadRequest(
                "Fields 'studentId', 'activityId' and 'points' are required".to_string(),
            ))
        }
    };
    if !(POINTS_MIN..=POINTS_MAX).contains(&points) {
        return Err(AppError::BadRequest(format!(
            "'points' must be between {} and {}",
            POINTS_MIN, POINTS_MAX
        )));
    }

    // Student is resolved before the template, so a request with both ids
    // unknown reports the missing student.
    let mut students = state.store.load_students().await;
    let student = students
        .iter_mut()
        .find(|s| s.id == student_id)
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

    let templates = state.store.load_templates().await;
    let template = templates
        .iter()
        .find(|t| t.id == activity_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("Activity template {} not found", activity_id))
        })?;

    let old_level = student.level();
    let now = chrono::Utc::now();
    student.total_points += points;
    student.updated_at = format_utc_rfc3339(now);
    let new_level = student.level();
    let evolved = new_level > old_level;

    let mut awards = state.store.load_awards().await;
    let award = AwardRecord {
        id: next_id(awards.iter().map(|a| a.id)),
        student_id,
        activity_id,
        name: template.name.clone(),
        points,
        date: format_award_date(now),
        created_at: format_utc_rfc3339(now),
    };
    awards.push(award.clone());
    let updated_student = student.clone();

    // Two separate documents: a crash between these writes can leave the
    // student total updated without a matching ledger entry.
    state.store.save_students(&students).await?;
    state.store.save_awards(&awards).await?;

    tracing::info!(
        student_id,
        activity_id,
        points,
        evolved,
        new_level,
        "Points awarded"
    );

    Ok((
        StatusCode::CREATED,
        ApiResponse::data(AwardOutcome {
            award,
            student: updated_student,
            evolved,
            new_level,
        }),
    ))
}
