//! Physical evaluation queries.

use crate::model::Evaluation;
use sqlx::PgPool;

const COLUMNS: &str = "id, student_id, instructor_id, goal, weight_kg, height_m, \
                       body_fat_pct, muscle_mass_kg, notes, created_at";

pub struct EvaluationRepo;

impl EvaluationRepo {
    /// Evaluations for one student, newest first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Evaluation>, sqlx::Error> {
        sqlx::query_as::<_, Evaluation>(&format!(
            "SELECT {COLUMNS} FROM evaluations WHERE student_id = $1 ORDER BY created_at DESC"
        ))
        .bind(student_id)
        .fetch_all(pool)
        .await
    }
}
