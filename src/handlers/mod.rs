//! HTTP handlers, one module per resource.

pub mod enrollment;
pub mod plan;
pub mod student;
