//! Workout queries.

use crate::model::Workout;
use sqlx::PgPool;

const COLUMNS: &str = "id, student_id, instructor_id, name, description, kind, \
                       level, duration_minutes, status, created_at, updated_at";

pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Workouts for one student, newest first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Workout>, sqlx::Error> {
        sqlx::query_as::<_, Workout>(&format!(
            "SELECT {COLUMNS} FROM workouts WHERE student_id = $1 ORDER BY created_at DESC"
        ))
        .bind(student_id)
        .fetch_all(pool)
        .await
    }
}
