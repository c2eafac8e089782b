//! Enrollment endpoints.

use crate::dto::NewEnrollment;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewEnrollment>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.enrollments.create(body).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.enrollments.get_by_id(id).await?;
    Ok(Json(dto))
}

pub async fn list_overdue(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let dtos = state.enrollments.list_overdue().await?;
    Ok(Json(dtos))
}

pub async fn count_active(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let count = state.enrollments.count_active().await?;
    Ok(Json(serde_json::json!({ "count": count })))
}
