//! Business services: lifecycle orchestration over the persistence gateway.

mod enrollment;
mod plan;
mod student;
pub mod validation;

pub use enrollment::EnrollmentService;
pub use plan::PlanService;
pub use student::{format_matriculation_number, StudentService};
