//! Plan CRUD.

use crate::dto::{NewPlan, PlanDto, PlanPatch};
use crate::error::ApiError;
use crate::repository::PlanRepo;
use crate::service::validation;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PlanService {
    pool: PgPool,
}

impl PlanService {
    pub fn new(pool: PgPool) -> Self {
        PlanService { pool }
    }

    pub async fn create(&self, input: NewPlan) -> Result<PlanDto, ApiError> {
        validation::validate_new_plan(&input)?;
        tracing::info!(name = %input.name, "creating plan");
        let plan = PlanRepo::insert(&self.pool, &input).await?;
        Ok(plan.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<PlanDto, ApiError> {
        let plan = PlanRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("plan {}", id)))?;
        Ok(plan.into())
    }

    pub async fn list_active(&self) -> Result<Vec<PlanDto>, ApiError> {
        let rows = PlanRepo::list_active(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i64, patch: PlanPatch) -> Result<PlanDto, ApiError> {
        if let Some(price) = patch.price {
            if price <= 0.0 {
                return Err(ApiError::InvalidInput("price must be greater than zero".into()));
            }
        }
        if let Some(days) = patch.duration_days {
            if days <= 0 {
                return Err(ApiError::InvalidInput(
                    "durationDays must be greater than zero".into(),
                ));
            }
        }
        let plan = PlanRepo::update_partial(&self.pool, id, &patch)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("plan {}", id)))?;
        Ok(plan.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let affected = PlanRepo::delete(&self.pool, id).await?;
        if affected == 0 {
            return Err(ApiError::NotFound(format!("plan {}", id)));
        }
        tracing::info!(id, "plan deleted");
        Ok(())
    }
}
