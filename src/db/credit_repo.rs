// src/db/credit_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::credit::CreditApplication};

#[derive(Clone, Default)]
pub struct CreditRepository;

impl CreditRepository {
    pub fn new() -> Self {
        Self
    }

    // Visão da financeira e do admin: todas as solicitações
    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<CreditApplication>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let applications = sqlx::query_as::<_, CreditApplication>(
            r#"
            SELECT id, user_id, requested_amount, status, admin_status,
                   credit_limit, final_credit_limit, created_at, updated_at
            FROM credit_applications
            ORDER BY created_at DESC
            "#,
        )
            .fetch_all(executor)
            .await?;

        Ok(applications)
    }

    // Visão do importador: apenas as próprias solicitações
    pub async fn list_by_user<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<CreditApplication>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let applications = sqlx::query_as::<_, CreditApplication>(
            r#"
            SELECT id, user_id, requested_amount, status, admin_status,
                   credit_limit, final_credit_limit, created_at, updated_at
            FROM credit_applications
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
            .bind(user_id)
            .fetch_all(executor)
            .await?;

        Ok(applications)
    }
}
