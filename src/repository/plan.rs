//! Plan queries.

use crate::dto::{NewPlan, PlanPatch};
use crate::model::Plan;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, description, price, duration_days, active, \
                       created_at, updated_at";

pub struct PlanRepo;

impl PlanRepo {
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Plan>, sqlx::Error> {
        sqlx::query_as::<_, Plan>(&format!("SELECT {COLUMNS} FROM plans WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Plan>, sqlx::Error> {
        sqlx::query_as::<_, Plan>(&format!(
            "SELECT {COLUMNS} FROM plans WHERE active ORDER BY name"
        ))
        .fetch_all(pool)
        .await
    }

    pub async fn insert(pool: &PgPool, input: &NewPlan) -> Result<Plan, sqlx::Error> {
        sqlx::query_as::<_, Plan>(&format!(
            "INSERT INTO plans (name, description, price, duration_days, active, \
                                created_at, updated_at) \
             VALUES ($1, $2, $3, $4, TRUE, NOW(), NOW()) \
             RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.price)
        .bind(input.duration_days)
        .fetch_optional(pool)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
    }

    /// Partial merge: NULL parameters leave the stored value untouched.
    pub async fn update_partial(
        pool: &PgPool,
        id: i64,
        patch: &PlanPatch,
    ) -> Result<Option<Plan>, sqlx::Error> {
        sqlx::query_as::<_, Plan>(&format!(
            "UPDATE plans SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 price = COALESCE($4, price), \
                 duration_days = COALESCE($5, duration_days), \
                 active = COALESCE($6, active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.price)
        .bind(patch.duration_days)
        .bind(patch.active)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
