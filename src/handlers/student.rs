//! Student endpoints: lifecycle operations, lookups, list variants, stats.

use crate::dto::{NewStudent, StudentPatch};
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::model::Role;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

fn parse_role(s: &str) -> Result<Role, ApiError> {
    s.parse()
        .map_err(|_| ApiError::InvalidInput(format!("unknown role: {}", s)))
}

#[derive(Deserialize)]
pub struct PageParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct FilterParams {
    pub name: Option<String>,
    pub role: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewStudent>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.students.create(body).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let dtos = state.students.list_active(page.limit, page.offset).await?;
    Ok(Json(dtos))
}

pub async fn list_inactive(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let dtos = state.students.list_inactive().await?;
    Ok(Json(dtos))
}

pub async fn list_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let role = parse_role(&role)?;
    let dtos = state.students.list_by_role(role).await?;
    Ok(Json(dtos))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let name = params
        .name
        .ok_or_else(|| ApiError::InvalidInput("name query parameter is required".into()))?;
    let dtos = state.students.search_by_name(&name).await?;
    Ok(Json(dtos))
}

pub async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, ApiError> {
    let role = params.role.as_deref().map(parse_role).transpose()?;
    let dtos = state
        .students
        .filter(params.name.as_deref(), role, params.limit, params.offset)
        .await?;
    Ok(Json(dtos))
}

pub async fn list_without_enrollment(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let dtos = state.students.list_without_enrollment().await?;
    Ok(Json(dtos))
}

pub async fn count_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let role = parse_role(&role)?;
    let count = state.students.count_by_role(role).await?;
    Ok(Json(serde_json::json!({ "count": count })))
}

pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.students.stats().await?;
    Ok(Json(stats))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.students.get_by_id(id).await?;
    Ok(Json(dto))
}

pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.students.get_by_email(&email).await?;
    Ok(Json(dto))
}

pub async fn get_by_cpf(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.students.get_by_cpf(&cpf).await?;
    Ok(Json(dto))
}

pub async fn get_by_matriculation(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.students.get_by_matriculation(&number).await?;
    Ok(Json(dto))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(body): JsonBody<StudentPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let dto = state.students.update(id, body).await?;
    Ok(Json(dto))
}

pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.students.deactivate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reactivate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.students.reactivate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn enrollments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dtos = state.enrollments.list_by_student(id).await?;
    Ok(Json(dtos))
}

pub async fn workouts(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dtos = state.students.list_workouts(id).await?;
    Ok(Json(dtos))
}

pub async fn evaluations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dtos = state.students.list_evaluations(id).await?;
    Ok(Json(dtos))
}
