//! Physical evaluation transfer type.

use crate::model::Evaluation;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    pub id: i64,
    pub student_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Evaluation> for EvaluationDto {
    fn from(e: Evaluation) -> Self {
        EvaluationDto {
            id: e.id,
            student_id: e.student_id,
            instructor_id: e.instructor_id,
            goal: e.goal,
            weight_kg: e.weight_kg,
            height_m: e.height_m,
            body_fat_pct: e.body_fat_pct,
            muscle_mass_kg: e.muscle_mass_kg,
            notes: e.notes,
            created_at: e.created_at,
        }
    }
}
