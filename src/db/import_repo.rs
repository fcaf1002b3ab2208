// src/db/import_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::import::Import};

#[derive(Clone, Default)]
pub struct ImportRepository;

impl ImportRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_all<'e, E>(&self, executor: E) -> Result<Vec<Import>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let imports = sqlx::query_as::<_, Import>(
            r#"
            SELECT id, user_id, credit_application_id, import_name, total_value,
                   status, shipping_method, created_at, updated_at
            FROM imports
            ORDER BY created_at DESC
            "#,
        )
            .fetch_all(executor)
            .await?;

        Ok(imports)
    }

    pub async fn list_by_user<'e, E>(&self, executor: E, user_id: Uuid) -> Result<Vec<Import>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let imports = sqlx::query_as::<_, Import>(
            r#"
            SELECT id, user_id, credit_application_id, import_name, total_value,
                   status, shipping_method, created_at, updated_at
            FROM imports
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
            .bind(user_id)
            .fetch_all(executor)
            .await?;

        Ok(imports)
    }
}
