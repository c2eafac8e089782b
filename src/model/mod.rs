//! Persisted row types, one module per table that the API reads.
//! The exercise catalog and instructor tables exist in the schema
//! (migration.rs) but have no read surface yet.

pub mod enrollment;
pub mod evaluation;
pub mod plan;
pub mod student;
pub mod workout;

pub use enrollment::{Enrollment, EnrollmentStatus};
pub use evaluation::Evaluation;
pub use plan::Plan;
pub use student::{Role, Student};
pub use workout::Workout;
