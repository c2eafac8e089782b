//! Enrollment transfer types.

use crate::model::{Enrollment, EnrollmentStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub id: i64,
    pub student_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: EnrollmentStatus,
    pub enrolled_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub overdue: bool,
}

impl EnrollmentDto {
    pub fn from_row(e: Enrollment, today: NaiveDate) -> Self {
        let overdue = e.is_overdue(today);
        EnrollmentDto {
            id: e.id,
            student_id: e.student_id,
            plan_id: e.plan_id,
            start_date: e.start_date,
            end_date: e.end_date,
            status: e.status,
            enrolled_on: e.enrolled_on,
            created_at: e.created_at,
            overdue,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    pub student_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
