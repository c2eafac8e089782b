//! Student lifecycle manager: create, read, list, partial update,
//! soft delete, reactivate, and aggregate counts.
//!
//! Business rules:
//! - email and CPF are unique among currently-active students only;
//! - matriculation numbers are system-generated, sequential, immutable;
//! - deletion is always soft (the `active` flag), never physical;
//! - default listings show active students only.
//!
//! Check-then-write sequences (create, update) run inside one transaction;
//! the partial unique indexes on active email/CPF remain the authoritative
//! guard, and a violation on commit surfaces as a conflict.

use crate::dto::{
    EvaluationDto, NewStudent, RoleCount, StudentDto, StudentPatch, StudentStats, WorkoutDto,
};
use crate::error::ApiError;
use crate::mapper;
use crate::model::{Role, Student};
use crate::repository::{EvaluationRepo, RelatedRepo, StudentRepo, WorkoutRepo};
use crate::service::validation;
use sqlx::PgPool;

/// Matriculation numbers are `AKD` plus a zero-padded 3-digit sequence;
/// the format grows past three digits instead of truncating.
pub fn format_matriculation_number(seq: i64) -> String {
    format!("AKD{:03}", seq)
}

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 1000;

fn clamp_page(limit: Option<u32>, offset: Option<u32>) -> (u32, u32) {
    (
        limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT),
        offset.unwrap_or(0),
    )
}

#[derive(Clone)]
pub struct StudentService {
    pool: PgPool,
}

impl StudentService {
    pub fn new(pool: PgPool) -> Self {
        StudentService { pool }
    }

    /// Create a new student: validate required fields, enforce
    /// active-scoped email/CPF uniqueness, assign the next matriculation
    /// number, persist as active with audit timestamps.
    pub async fn create(&self, input: NewStudent) -> Result<StudentDto, ApiError> {
        validation::validate_new_student(&input)?;
        tracing::info!(email = %input.email, "creating student");

        let mut tx = self.pool.begin().await?;
        if StudentRepo::exists_active_email(&mut *tx, &input.email, None).await? {
            return Err(ApiError::Conflict(format!(
                "an active student already uses email {}",
                input.email
            )));
        }
        if StudentRepo::exists_active_cpf(&mut *tx, &input.cpf, None).await? {
            return Err(ApiError::Conflict(format!(
                "an active student already uses CPF {}",
                input.cpf
            )));
        }

        let seq = StudentRepo::next_matriculation_number(&mut *tx).await?;
        let number = format_matriculation_number(seq);
        let student = StudentRepo::insert(&mut *tx, &input, &number)
            .await
            .map_err(|e| ApiError::from_write(e, "email, CPF or matriculation number already in use"))?;
        tx.commit()
            .await
            .map_err(|e| ApiError::from_write(e, "email, CPF or matriculation number already in use"))?;

        tracing::info!(id = student.id, matriculation = %student.matriculation_number, "student created");
        self.to_full_dto(student).await
    }

    /// Fetch by id, including inactive records. Full fidelity.
    pub async fn get_by_id(&self, id: i64) -> Result<StudentDto, ApiError> {
        let student = StudentRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("student {}", id)))?;
        self.to_full_dto(student).await
    }

    /// Fetch by id, active records only. Full fidelity.
    pub async fn get_active_by_id(&self, id: i64) -> Result<StudentDto, ApiError> {
        let student = StudentRepo::find_active_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("active student {}", id)))?;
        self.to_full_dto(student).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<StudentDto, ApiError> {
        let student = StudentRepo::find_by_email(&self.pool, email)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("student with email {}", email)))?;
        self.to_full_dto(student).await
    }

    pub async fn get_by_cpf(&self, cpf: &str) -> Result<StudentDto, ApiError> {
        let student = StudentRepo::find_by_cpf(&self.pool, cpf)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("student with CPF {}", cpf)))?;
        self.to_full_dto(student).await
    }

    pub async fn get_by_matriculation(&self, number: &str) -> Result<StudentDto, ApiError> {
        let student = StudentRepo::find_by_matriculation(&self.pool, number)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("student with matriculation {}", number)))?;
        self.to_full_dto(student).await
    }

    /// Active students, name-sorted, limit/offset paginated. Simple fidelity.
    pub async fn list_active(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<StudentDto>, ApiError> {
        let (limit, offset) = clamp_page(limit, offset);
        let rows = StudentRepo::list_active(&self.pool, limit, offset).await?;
        Ok(mapper::students_to_dto_simple(&rows))
    }

    pub async fn list_inactive(&self) -> Result<Vec<StudentDto>, ApiError> {
        let rows = StudentRepo::list_inactive(&self.pool).await?;
        Ok(mapper::students_to_dto_simple(&rows))
    }

    pub async fn list_by_role(&self, role: Role) -> Result<Vec<StudentDto>, ApiError> {
        let rows = StudentRepo::list_active_by_role(&self.pool, role).await?;
        Ok(mapper::students_to_dto_simple(&rows))
    }

    /// Unpaginated, case-insensitive, unanchored name search among active
    /// students. A name matching nothing yields an empty list, never an
    /// error.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<StudentDto>, ApiError> {
        let rows = StudentRepo::search_active_by_name(&self.pool, name).await?;
        Ok(mapper::students_to_dto_simple(&rows))
    }

    /// Combined filter with pagination; an absent name or role places no
    /// constraint on that field.
    pub async fn filter(
        &self,
        name: Option<&str>,
        role: Option<Role>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<StudentDto>, ApiError> {
        let (limit, offset) = clamp_page(limit, offset);
        let rows = StudentRepo::filter_active(&self.pool, name, role, limit, offset).await?;
        Ok(mapper::students_to_dto_simple(&rows))
    }

    /// Active students not yet enrolled in any plan.
    pub async fn list_without_enrollment(&self) -> Result<Vec<StudentDto>, ApiError> {
        let rows = StudentRepo::list_active_without_enrollment(&self.pool).await?;
        Ok(mapper::students_to_dto_simple(&rows))
    }

    /// Partial update of an active student. Non-null input fields overwrite
    /// stored values; null fields are untouched; matriculation number and
    /// created_at are never mutated through this path.
    pub async fn update(&self, id: i64, patch: StudentPatch) -> Result<StudentDto, ApiError> {
        validation::validate_student_patch(&patch)?;
        tracing::info!(id, "updating student");

        let mut tx = self.pool.begin().await?;
        let current = StudentRepo::find_active_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("active student {}", id)))?;

        if let Some(email) = &patch.email {
            if *email != current.email
                && StudentRepo::exists_active_email(&mut *tx, email, Some(id)).await?
            {
                return Err(ApiError::Conflict(format!(
                    "another active student already uses email {}",
                    email
                )));
            }
        }
        if let Some(cpf) = &patch.cpf {
            if *cpf != current.cpf
                && StudentRepo::exists_active_cpf(&mut *tx, cpf, Some(id)).await?
            {
                return Err(ApiError::Conflict(format!(
                    "another active student already uses CPF {}",
                    cpf
                )));
            }
        }

        let updated = StudentRepo::update_partial(&mut *tx, id, &patch)
            .await
            .map_err(|e| ApiError::from_write(e, "email or CPF already in use"))?
            .ok_or_else(|| ApiError::NotFound(format!("active student {}", id)))?;
        tx.commit()
            .await
            .map_err(|e| ApiError::from_write(e, "email or CPF already in use"))?;

        tracing::info!(id, "student updated");
        self.to_full_dto(updated).await
    }

    /// Soft delete. The conditional write guarantees exactly one of two
    /// concurrent deactivations succeeds; the loser gets a conflict.
    pub async fn deactivate(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deactivating student");
        StudentRepo::find_active_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("active student {}", id)))?;

        let affected = StudentRepo::deactivate(&self.pool, id).await?;
        if affected == 0 {
            return Err(ApiError::Conflict(format!("student {} is already inactive", id)));
        }
        tracing::info!(id, "student deactivated");
        Ok(())
    }

    /// Reverse a soft delete. Not-found if the id does not exist at all;
    /// conflict if the record is already active.
    pub async fn reactivate(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "reactivating student");
        if !StudentRepo::exists_by_id(&self.pool, id).await? {
            return Err(ApiError::NotFound(format!("student {}", id)));
        }

        let affected = StudentRepo::reactivate(&self.pool, id).await?;
        if affected == 0 {
            return Err(ApiError::Conflict(format!("student {} is already active", id)));
        }
        tracing::info!(id, "student reactivated");
        Ok(())
    }

    /// Aggregate counts: active, inactive, grand total, active by role.
    pub async fn stats(&self) -> Result<StudentStats, ApiError> {
        let active = StudentRepo::count_active(&self.pool).await?;
        let inactive = StudentRepo::count_inactive(&self.pool).await?;
        let total = StudentRepo::count_total(&self.pool).await?;
        let active_by_role = StudentRepo::count_active_grouped_by_role(&self.pool)
            .await?
            .into_iter()
            .map(|(role, count)| RoleCount { role, count })
            .collect();
        Ok(StudentStats {
            active,
            inactive,
            total,
            active_by_role,
        })
    }

    pub async fn count_by_role(&self, role: Role) -> Result<i64, ApiError> {
        Ok(StudentRepo::count_active_by_role(&self.pool, role).await?)
    }

    /// Workouts of one student, newest first. The student must exist
    /// (any status).
    pub async fn list_workouts(&self, id: i64) -> Result<Vec<WorkoutDto>, ApiError> {
        if !StudentRepo::exists_by_id(&self.pool, id).await? {
            return Err(ApiError::NotFound(format!("student {}", id)));
        }
        let rows = WorkoutRepo::list_by_student(&self.pool, id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Physical evaluations of one student, newest first.
    pub async fn list_evaluations(&self, id: i64) -> Result<Vec<EvaluationDto>, ApiError> {
        if !StudentRepo::exists_by_id(&self.pool, id).await? {
            return Err(ApiError::NotFound(format!("student {}", id)));
        }
        let rows = EvaluationRepo::list_by_student(&self.pool, id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn to_full_dto(&self, student: Student) -> Result<StudentDto, ApiError> {
        let related = RelatedRepo::ids_for_student(&self.pool, student.id).await?;
        Ok(mapper::student_to_dto_full(&student, related))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matriculation_number_is_zero_padded() {
        assert_eq!(format_matriculation_number(1), "AKD001");
        assert_eq!(format_matriculation_number(42), "AKD042");
        assert_eq!(format_matriculation_number(999), "AKD999");
    }

    #[test]
    fn matriculation_number_grows_past_three_digits() {
        assert_eq!(format_matriculation_number(1000), "AKD1000");
        assert_eq!(format_matriculation_number(12345), "AKD12345");
    }

    #[test]
    fn pagination_defaults_and_caps() {
        assert_eq!(clamp_page(None, None), (100, 0));
        assert_eq!(clamp_page(Some(25), Some(50)), (25, 50));
        assert_eq!(clamp_page(Some(100_000), None), (1000, 0));
    }
}
