// src/db/user_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::auth::User};

// O repositório de usuários, responsável pelas leituras da tabela 'users'
#[derive(Clone, Default)]
pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<User>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, full_name, company_name, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(user)
    }

    // Todos os usuários ativos (o relatório ignora os inativos)
    pub async fn list_active<'e, E>(&self, executor: E) -> Result<Vec<User>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, full_name, company_name, role, created_at, updated_at
            FROM users
            WHERE role <> 'inactive'
            ORDER BY email ASC
            "#,
        )
            .fetch_all(executor)
            .await?;

        Ok(users)
    }
}
