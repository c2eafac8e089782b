//! Plan CRUD endpoints.

use crate::dto::{NewPlan, PlanPatch};
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
    JsonBody(body): JsonBody<NewPlan>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.plans.create(body).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let dtos = state.plans.list_active().await?;
    Ok(Json(dtos))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.plans.get_by_id(id).await?;
    Ok(Json(dto))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(body): JsonBody<PlanPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.plans.update(id, body).await?;
    Ok(Json(dto))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.plans.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
