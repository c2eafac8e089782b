//! Startup DDL: enum types, tables, indexes, foreign keys.
//!
//! Statements are idempotent (IF NOT EXISTS where PostgreSQL supports it;
//! CREATE TYPE failures on re-run are ignored). Active-scoped uniqueness of
//! student email and CPF is enforced with partial unique indexes so the
//! storage layer, not the application check, is the authoritative guard.

use crate::error::ApiError;
use sqlx::PgPool;

const ENUM_TYPES: &[&str] = &[
    "CREATE TYPE user_role AS ENUM ('STUDENT', 'INSTRUCTOR', 'ADMIN')",
    "CREATE TYPE enrollment_status AS ENUM ('ACTIVE', 'SUSPENDED', 'CANCELLED', 'EXPIRED')",
];

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS students (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email TEXT NOT NULL,
        cpf VARCHAR(11) NOT NULL,
        phone VARCHAR(20) NOT NULL,
        role user_role NOT NULL,
        matriculation_number VARCHAR(20) NOT NULL UNIQUE,
        active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        deactivated_at TIMESTAMPTZ
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS plans (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        description TEXT,
        price DOUBLE PRECISION NOT NULL CHECK (price > 0),
        duration_days INTEGER NOT NULL CHECK (duration_days > 0),
        active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS enrollments (
        id BIGSERIAL PRIMARY KEY,
        student_id BIGINT NOT NULL REFERENCES students (id) ON DELETE CASCADE,
        plan_id BIGINT NOT NULL REFERENCES plans (id),
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        status enrollment_status NOT NULL DEFAULT 'ACTIVE',
        enrolled_on DATE NOT NULL DEFAULT CURRENT_DATE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS instructors (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        registration_code VARCHAR(20) NOT NULL UNIQUE,
        specialty TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS workouts (
        id BIGSERIAL PRIMARY KEY,
        student_id BIGINT NOT NULL REFERENCES students (id) ON DELETE CASCADE,
        instructor_id BIGINT REFERENCES instructors (id),
        name VARCHAR(100) NOT NULL,
        description TEXT,
        kind TEXT,
        level TEXT,
        duration_minutes INTEGER,
        status TEXT NOT NULL DEFAULT 'ACTIVE',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS exercises (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        description TEXT,
        muscle_group TEXT,
        kind TEXT,
        equipment TEXT,
        instructions TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS workout_exercises (
        id BIGSERIAL PRIMARY KEY,
        workout_id BIGINT NOT NULL REFERENCES workouts (id) ON DELETE CASCADE,
        exercise_id BIGINT NOT NULL REFERENCES exercises (id),
        position INTEGER NOT NULL,
        sets INTEGER NOT NULL,
        reps INTEGER NOT NULL,
        weight_kg DOUBLE PRECISION,
        rest_seconds INTEGER,
        notes TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS evaluations (
        id BIGSERIAL PRIMARY KEY,
        student_id BIGINT NOT NULL REFERENCES students (id) ON DELETE CASCADE,
        instructor_id BIGINT REFERENCES instructors (id),
        goal TEXT,
        weight_kg DOUBLE PRECISION,
        height_m DOUBLE PRECISION,
        body_fat_pct DOUBLE PRECISION,
        muscle_mass_kg DOUBLE PRECISION,
        notes TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

const INDEXES: &[&str] = &[
    // Authoritative active-scoped uniqueness: an inactive student's email
    // or CPF may be reused by a new active record.
    "CREATE UNIQUE INDEX IF NOT EXISTS ux_students_email_active \
     ON students (email) WHERE active",
    "CREATE UNIQUE INDEX IF NOT EXISTS ux_students_cpf_active \
     ON students (cpf) WHERE active",
    "CREATE INDEX IF NOT EXISTS ix_students_role_active \
     ON students (role) WHERE active",
    "CREATE INDEX IF NOT EXISTS ix_enrollments_student \
     ON enrollments (student_id)",
    "CREATE INDEX IF NOT EXISTS ix_enrollments_status_end_date \
     ON enrollments (status, end_date)",
    "CREATE INDEX IF NOT EXISTS ix_workouts_student ON workouts (student_id)",
    "CREATE INDEX IF NOT EXISTS ix_evaluations_student ON evaluations (student_id)",
];

/// Apply the schema. Safe to run on every startup.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), ApiError> {
    for ddl in ENUM_TYPES {
        // Re-runs fail with "type already exists"; CREATE TYPE has no
        // IF NOT EXISTS form.
        let _ = sqlx::query(ddl).execute(pool).await;
    }
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("schema migrations applied");
    Ok(())
}
