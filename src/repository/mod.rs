//! Persistence gateway: explicit parameterized queries, one function per
//! predicate. Values are always bound as parameters, never interpolated.

pub mod enrollment;
pub mod evaluation;
pub mod plan;
pub mod related;
pub mod student;
pub mod workout;

pub use enrollment::EnrollmentRepo;
pub use evaluation::EvaluationRepo;
pub use plan::PlanRepo;
pub use related::RelatedRepo;
pub use student::StudentRepo;
pub use workout::WorkoutRepo;
