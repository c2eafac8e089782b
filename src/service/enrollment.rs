//! Enrollment operations: create against an active student and plan,
//! lookups, and the overdue report.

use crate::dto::{EnrollmentDto, NewEnrollment};
use crate::error::ApiError;
use crate::repository::{EnrollmentRepo, PlanRepo, StudentRepo};
use chrono::Utc;
use sqlx::PgPool;

#[derive(Clone)]
pub struct EnrollmentService {
    pool: PgPool,
}

impl EnrollmentService {
    pub fn new(pool: PgPool) -> Self {
        EnrollmentService { pool }
    }

    pub async fn create(&self, input: NewEnrollment) -> Result<EnrollmentDto, ApiError> {
        if input.end_date < input.start_date {
            return Err(ApiError::InvalidInput(
                "endDate must not precede startDate".into(),
            ));
        }
        StudentRepo::find_active_by_id(&self.pool, input.student_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("active student {}", input.student_id)))?;
        let plan = PlanRepo::find_by_id(&self.pool, input.plan_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("plan {}", input.plan_id)))?;
        if !plan.active {
            return Err(ApiError::InvalidInput(format!("plan {} is inactive", input.plan_id)));
        }

        tracing::info!(student_id = input.student_id, plan_id = input.plan_id, "creating enrollment");
        let row = EnrollmentRepo::insert(&self.pool, &input).await?;
        Ok(EnrollmentDto::from_row(row, Utc::now().date_naive()))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<EnrollmentDto, ApiError> {
        let row = EnrollmentRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("enrollment {}", id)))?;
        Ok(EnrollmentDto::from_row(row, Utc::now().date_naive()))
    }

    /// Enrollments of one student, newest first. The student must exist
    /// (any status).
    pub async fn list_by_student(&self, student_id: i64) -> Result<Vec<EnrollmentDto>, ApiError> {
        if !StudentRepo::exists_by_id(&self.pool, student_id).await? {
            return Err(ApiError::NotFound(format!("student {}", student_id)));
        }
        let today = Utc::now().date_naive();
        let rows = EnrollmentRepo::list_by_student(&self.pool, student_id).await?;
        Ok(rows
            .into_iter()
            .map(|e| EnrollmentDto::from_row(e, today))
            .collect())
    }

    pub async fn count_active(&self) -> Result<i64, ApiError> {
        Ok(EnrollmentRepo::count_active(&self.pool).await?)
    }

    /// Enrollments still marked active whose end date has passed.
    pub async fn list_overdue(&self) -> Result<Vec<EnrollmentDto>, ApiError> {
        let today = Utc::now().date_naive();
        let rows = EnrollmentRepo::list_overdue(&self.pool, today).await?;
        Ok(rows
            .into_iter()
            .map(|e| EnrollmentDto::from_row(e, today))
            .collect())
    }
}
