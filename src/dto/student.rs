//! Student transfer types.
//!
//! `StudentDto` serves both fidelity levels: simple (flat fields only, used
//! by listings) and full (flat fields plus related-record id lists, used by
//! single-record reads). The id lists are `None` in simple fidelity and are
//! skipped during serialization.

use crate::model::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub role: Role,
    pub matriculation_number: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_ids: Option<Vec<i64>>,
}

/// Create payload. Every field is required and validated before persistence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub role: Role,
}

/// Partial-update payload: absent (null) fields mean "no change".
/// Matriculation number and creation timestamp are not updatable and have
/// no counterpart here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
}

/// Aggregate counts for the stats endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub active: i64,
    pub inactive: i64,
    pub total: i64,
    pub active_by_role: Vec<RoleCount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCount {
    pub role: Role,
    pub count: i64,
}
