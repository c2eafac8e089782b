//! Student queries. Functions that take `impl PgExecutor` participate in
//! the caller's transaction (check-then-write sequences in the service);
//! the rest read through the pool directly.

use crate::dto::{NewStudent, StudentPatch};
use crate::model::{Role, Student};
use sqlx::{PgExecutor, PgPool};

const COLUMNS: &str = "id, name, email, cpf, phone, role, matriculation_number, \
                       active, created_at, updated_at, deactivated_at";

pub struct StudentRepo;

impl StudentRepo {
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_active_by_id(
        exec: impl PgExecutor<'_>,
        id: i64,
    ) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE id = $1 AND active"
        ))
        .bind(id)
        .fetch_optional(exec)
        .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_cpf(pool: &PgPool, cpf: &str) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE cpf = $1"
        ))
        .bind(cpf)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_matriculation(
        pool: &PgPool,
        number: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE matriculation_number = $1"
        ))
        .bind(number)
        .fetch_optional(pool)
        .await
    }

    pub async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Active-scoped email uniqueness check; `exclude_id` skips the record
    /// being updated.
    pub async fn exists_active_email(
        exec: impl PgExecutor<'_>,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM students \
             WHERE email = $1 AND active AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(exec)
        .await
    }

    /// Active-scoped CPF uniqueness check; `exclude_id` skips the record
    /// being updated.
    pub async fn exists_active_cpf(
        exec: impl PgExecutor<'_>,
        cpf: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM students \
             WHERE cpf = $1 AND active AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(cpf)
        .bind(exclude_id)
        .fetch_one(exec)
        .await
    }

    pub async fn list_active(
        pool: &PgPool,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE active ORDER BY name LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(pool)
        .await
    }

    pub async fn list_inactive(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE NOT active ORDER BY name"
        ))
        .fetch_all(pool)
        .await
    }

    pub async fn list_active_by_role(
        pool: &PgPool,
        role: Role,
    ) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students WHERE role = $1 AND active ORDER BY name"
        ))
        .bind(role)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive, unanchored name search among active students.
    pub async fn search_active_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students \
             WHERE active AND name ILIKE '%' || $1 || '%' ORDER BY name"
        ))
        .bind(name)
        .fetch_all(pool)
        .await
    }

    /// Combined filter: a NULL name or role places no constraint on that
    /// field.
    pub async fn filter_active(
        pool: &PgPool,
        name: Option<&str>,
        role: Option<Role>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students \
             WHERE active \
               AND ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%') \
               AND ($2::user_role IS NULL OR role = $2) \
             ORDER BY name LIMIT $3 OFFSET $4"
        ))
        .bind(name)
        .bind(role)
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(pool)
        .await
    }

    /// Active students with zero enrollments.
    pub async fn list_active_without_enrollment(
        pool: &PgPool,
    ) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {COLUMNS} FROM students s \
             WHERE s.active \
               AND NOT EXISTS (SELECT 1 FROM enrollments e WHERE e.student_id = s.id) \
             ORDER BY s.name"
        ))
        .fetch_all(pool)
        .await
    }

    /// Next sequential matriculation number: highest numeric suffix under
    /// the AKD prefix plus one; 1 on an empty system.
    pub async fn next_matriculation_number(
        exec: impl PgExecutor<'_>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(MAX(CAST(SUBSTRING(matriculation_number FROM 4) AS BIGINT)), 0) + 1 \
             FROM students WHERE matriculation_number ~ '^AKD[0-9]+$'",
        )
        .fetch_one(exec)
        .await
    }

    /// Insert a new active student; audit timestamps are assigned here.
    pub async fn insert(
        exec: impl PgExecutor<'_>,
        input: &NewStudent,
        matriculation_number: &str,
    ) -> Result<Student, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students \
                 (name, email, cpf, phone, role, matriculation_number, \
                  active, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, TRUE, NOW(), NOW()) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.cpf)
        .bind(&input.phone)
        .bind(input.role)
        .bind(matriculation_number)
        .fetch_optional(exec)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
    }

    /// Partial merge against the active record: NULL parameters leave the
    /// stored value untouched. Matriculation number and created_at are
    /// never part of the SET list.
    pub async fn update_partial(
        exec: impl PgExecutor<'_>,
        id: i64,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(&format!(
            "UPDATE students SET \
                 name = COALESCE($2, name), \
                 email = COALESCE($3, email), \
                 cpf = COALESCE($4, cpf), \
                 phone = COALESCE($5, phone), \
                 role = COALESCE($6, role), \
                 updated_at = NOW() \
             WHERE id = $1 AND active \
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.cpf.as_deref())
        .bind(patch.phone.as_deref())
        .bind(patch.role)
        .fetch_optional(exec)
        .await
    }

    /// Conditional soft delete: affects zero rows if the record is already
    /// inactive or absent.
    pub async fn deactivate(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET active = FALSE, deactivated_at = NOW() \
             WHERE id = $1 AND active",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Conditional reactivation: affects zero rows if the record is already
    /// active or absent.
    pub async fn reactivate(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET active = TRUE, deactivated_at = NULL, updated_at = NOW() \
             WHERE id = $1 AND NOT active",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE active")
            .fetch_one(pool)
            .await
    }

    pub async fn count_inactive(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE NOT active")
            .fetch_one(pool)
            .await
    }

    pub async fn count_total(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(pool)
            .await
    }

    pub async fn count_active_by_role(pool: &PgPool, role: Role) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE role = $1 AND active")
            .bind(role)
            .fetch_one(pool)
            .await
    }

    pub async fn count_active_grouped_by_role(
        pool: &PgPool,
    ) -> Result<Vec<(Role, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (Role, i64)>(
            "SELECT role, COUNT(*) FROM students WHERE active GROUP BY role ORDER BY role",
        )
        .fetch_all(pool)
        .await
    }
}
