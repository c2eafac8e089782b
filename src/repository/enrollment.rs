//! Enrollment queries.

use crate::dto::NewEnrollment;
use crate::model::Enrollment;
use chrono::NaiveDate;
use sqlx::PgPool;

const COLUMNS: &str = "id, student_id, plan_id, start_date, end_date, status, \
                       enrolled_on, created_at";

pub struct EnrollmentRepo;

impl EnrollmentRepo {
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Enrollment>, sqlx::Error> {
        sqlx::query_as::<_, Enrollment>(&format!(
            "SELECT {COLUMNS} FROM enrollments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn insert(pool: &PgPool, input: &NewEnrollment) -> Result<Enrollment, sqlx::Error> {
        sqlx::query_as::<_, Enrollment>(&format!(
            "INSERT INTO enrollments \
                 (student_id, plan_id, start_date, end_date, status, enrolled_on, created_at) \
             VALUES ($1, $2, $3, $4, 'ACTIVE', CURRENT_DATE, NOW()) \
             RETURNING {COLUMNS}"
        ))
        .bind(input.student_id)
        .bind(input.plan_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_optional(pool)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
    }

    /// Enrollments for one student, newest first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: i64,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        sqlx::query_as::<_, Enrollment>(&format!(
            "SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 ORDER BY created_at DESC"
        ))
        .bind(student_id)
        .fetch_all(pool)
        .await
    }

    /// Enrollments still marked active whose end date has passed.
    pub async fn list_overdue(
        pool: &PgPool,
        today: NaiveDate,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        sqlx::query_as::<_, Enrollment>(&format!(
            "SELECT {COLUMNS} FROM enrollments \
             WHERE end_date < $1 AND status = 'ACTIVE' ORDER BY end_date"
        ))
        .bind(today)
        .fetch_all(pool)
        .await
    }

    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM enrollments WHERE status = 'ACTIVE'",
        )
        .fetch_one(pool)
        .await
    }
}
