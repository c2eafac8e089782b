//! Workout transfer type.

use crate::model::Workout;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDto {
    pub id: i64,
    pub student_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Workout> for WorkoutDto {
    fn from(w: Workout) -> Self {
        WorkoutDto {
            id: w.id,
            student_id: w.student_id,
            instructor_id: w.instructor_id,
            name: w.name,
            description: w.description,
            kind: w.kind,
            level: w.level,
            duration_minutes: w.duration_minutes,
            status: w.status,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}
