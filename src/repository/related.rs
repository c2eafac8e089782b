//! Related-record id lists for full-fidelity student reads.

use crate::mapper::RelatedIds;
use sqlx::PgPool;

pub struct RelatedRepo;

impl RelatedRepo {
    pub async fn ids_for_student(pool: &PgPool, student_id: i64) -> Result<RelatedIds, sqlx::Error> {
        let enrollment_ids = Self::ids(pool, "enrollments", student_id).await?;
        let workout_ids = Self::ids(pool, "workouts", student_id).await?;
        let evaluation_ids = Self::ids(pool, "evaluations", student_id).await?;
        Ok(RelatedIds {
            enrollment_ids,
            workout_ids,
            evaluation_ids,
        })
    }

    // table is one of the fixed names above, never caller input
    async fn ids(pool: &PgPool, table: &str, student_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(&format!(
            "SELECT id FROM {table} WHERE student_id = $1 ORDER BY id"
        ))
        .bind(student_id)
        .fetch_all(pool)
        .await
    }
}
