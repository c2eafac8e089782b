//! Shared application state for all routes.

use crate::service::{EnrollmentService, PlanService, StudentService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub students: StudentService,
    pub plans: PlanService,
    pub enrollments: EnrollmentService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState {
            students: StudentService::new(pool.clone()),
            plans: PlanService::new(pool.clone()),
            enrollments: EnrollmentService::new(pool.clone()),
            pool,
        }
    }
}
