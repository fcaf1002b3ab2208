// src/db/dashboard_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CreditRepository, ImportRepository, UserRepository},
    models::{auth::User, dashboard::CreditSnapshot},
    services::SnapshotSource,
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
    users: UserRepository,
    credits: CreditRepository,
    imports: ImportRepository,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            users: UserRepository::new(),
            credits: CreditRepository::new(),
            imports: ImportRepository::new(),
        }
    }

    pub async fn list_report_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list_active(&self.pool).await
    }
}

#[async_trait]
impl SnapshotSource for DashboardRepository {
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        self.users.find_by_id(&self.pool, user_id).await
    }

    async fn load_snapshot(&self, user: &User) -> Result<CreditSnapshot, AppError> {
        // Solicitações e importações precisam vir do mesmo instante,
        // senão o uso pode ser calculado contra um limite que já mudou.
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let (applications, imports) = if user.role.sees_all_records() {
            let applications = self.credits.list_all(&mut *tx).await?;
            let imports = self.imports.list_all(&mut *tx).await?;
            (applications, imports)
        } else {
            let applications = self.credits.list_by_user(&mut *tx, user.id).await?;
            let imports = self.imports.list_by_user(&mut *tx, user.id).await?;
            (applications, imports)
        };

        // Somente leitura: commit só para fechar a transação
        tx.commit().await?;

        Ok(CreditSnapshot { applications, imports })
    }
}
