// src/services/dashboard_service.rs

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::User,
        dashboard::{CreditDashboard, CreditSnapshot, ImportSummary},
        import::{Import, ImportStatus},
    },
    services::credit_calculator::{calculate_credit_metrics, calculate_credit_usage},
};

/// Camada de dados que entrega as solicitações e importações já filtradas
/// para o perfil do usuário.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>, AppError>;

    async fn load_snapshot(&self, user: &User) -> Result<CreditSnapshot, AppError>;
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn SnapshotSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    pub async fn credit_dashboard(&self, user_id: Uuid) -> Result<CreditDashboard, AppError> {
        let user = self
            .source
            .find_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        self.dashboard_for(&user).await
    }

    pub async fn dashboard_for(&self, user: &User) -> Result<CreditDashboard, AppError> {
        let snapshot = self.source.load_snapshot(user).await?;

        tracing::debug!(
            "Snapshot de {} ({}): {} solicitações, {} importações",
            user.email,
            user.role,
            snapshot.applications.len(),
            snapshot.imports.len()
        );

        Ok(build_dashboard(user, &snapshot))
    }
}

/// Monta o dashboard a partir de uma fotografia já carregada.
pub fn build_dashboard(user: &User, snapshot: &CreditSnapshot) -> CreditDashboard {
    CreditDashboard {
        user_id: user.id,
        role: user.role,
        metrics: calculate_credit_metrics(&snapshot.applications, user.role),
        usage: calculate_credit_usage(&snapshot.applications, &snapshot.imports, user.role),
        imports: summarize_imports(&snapshot.imports),
    }
}

pub fn summarize_imports(imports: &[Import]) -> ImportSummary {
    let mut summary = ImportSummary {
        total: imports.len(),
        ..ImportSummary::default()
    };

    for import in imports {
        let Some(status) = import.parsed_status() else {
            tracing::warn!("Importação {} com status desconhecido '{}'", import.id, import.status);
            summary.unknown_status += 1;
            // Mesmo critério do cálculo de crédito: só o que é final deixa de contar
            summary.active_value = summary.active_value.saturating_add(import.value());
            continue;
        };

        match status {
            ImportStatus::Completed => summary.completed += 1,
            ImportStatus::Cancelled => summary.cancelled += 1,
            _ => {
                summary.active += 1;
                summary.active_value = summary.active_value.saturating_add(import.value());
                if status.is_transport() {
                    summary.in_transport += 1;
                }
            }
        }
    }

    summary
}
