//! Workout row: a workout belongs to one student, optionally authored by
//! an instructor.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Workout {
    pub id: i64,
    pub student_id: i64,
    pub instructor_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub level: Option<String>,
    pub duration_minutes: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
