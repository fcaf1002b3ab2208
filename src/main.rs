//src/main.rs

// Job de consolidação dos dashboards de crédito: para cada usuário ativo
// (ou só o REPORT_USER_ID), calcula métricas, uso de crédito e o resumo das
// importações, loga o resultado e imprime uma linha JSON por usuário.

use spark_comex::{
    common::{error::AppError, numeric::format_brl},
    config::AppState,
    models::{auth::User, dashboard::CreditDashboard},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Inicializa o logger (RUST_LOG controla o nível)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().await?;

    // Faz o app rodar as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .map_err(AppError::from)?;

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let users = match app_state.settings.report_user_id {
        Some(user_id) => {
            let dashboard = app_state.dashboard_service.credit_dashboard(user_id).await?;
            report(&dashboard)?;
            return Ok(());
        }
        None => app_state.dashboard_repo.list_report_users().await?,
    };

    tracing::info!("🚀 Gerando dashboards para {} usuários", users.len());

    let mut failures = 0;
    for user in &users {
        if let Err(e) = report_user(&app_state, user).await {
            // Um usuário com problema não derruba o relatório inteiro
            tracing::error!("🔥 Falha ao gerar dashboard de {}: {}", user.email, e);
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{} de {} dashboards falharam", failures, users.len());
    }

    tracing::info!("✅ Dashboards gerados com sucesso!");
    Ok(())
}

async fn report_user(app_state: &AppState, user: &User) -> Result<(), AppError> {
    let dashboard = app_state.dashboard_service.dashboard_for(user).await?;
    report(&dashboard)
}

fn report(dashboard: &CreditDashboard) -> Result<(), AppError> {
    tracing::info!(
        "Usuário {} ({}): aprovado {} | usado {} | disponível {} | {} importações ativas",
        dashboard.user_id,
        dashboard.role,
        format_brl(dashboard.metrics.total_approved),
        format_brl(dashboard.usage.used),
        format_brl(dashboard.usage.available),
        dashboard.imports.active,
    );

    println!("{}", serde_json::to_string(dashboard)?);
    Ok(())
}
