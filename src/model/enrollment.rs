//! Enrollment row: links a student to a plan for a date range.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status stored in the `enrollment_status` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "enrollment_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EnrollmentStatus {
    Active,
    Suspended,
    Cancelled,
    Expired,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: EnrollmentStatus,
    pub enrolled_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    /// An enrollment is overdue when it is still marked active but its end
    /// date has passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == EnrollmentStatus::Active && self.end_date < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment(status: EnrollmentStatus, end: NaiveDate) -> Enrollment {
        Enrollment {
            id: 1,
            student_id: 1,
            plan_id: 1,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: end,
            status,
            enrolled_on: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn active_past_end_date_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
        assert!(enrollment(EnrollmentStatus::Active, end).is_overdue(today));
    }

    #[test]
    fn active_until_end_date_is_not_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(!enrollment(EnrollmentStatus::Active, today).is_overdue(today));
    }

    #[test]
    fn cancelled_past_end_date_is_not_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert!(!enrollment(EnrollmentStatus::Cancelled, end).is_overdue(today));
    }
}
