//! Physical evaluation row.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Evaluation {
    pub id: i64,
    pub student_id: i64,
    pub instructor_id: Option<i64>,
    pub goal: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
