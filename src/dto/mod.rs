//! Transfer representations. Wire format is JSON with camelCase keys.

pub mod enrollment;
pub mod evaluation;
pub mod plan;
pub mod student;
pub mod workout;

pub use enrollment::{EnrollmentDto, NewEnrollment};
pub use evaluation::EvaluationDto;
pub use plan::{NewPlan, PlanDto, PlanPatch};
pub use student::{NewStudent, RoleCount, StudentDto, StudentPatch, StudentStats};
pub use workout::WorkoutDto;
