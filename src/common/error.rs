// src/common/error.rs

use thiserror::Error;
use uuid::Uuid;

// Erros das bordas de I/O (banco, migrações, configuração).
// O núcleo de cálculo (lifecycle e crédito) nunca retorna erro.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usuário não encontrado: {0}")]
    UserNotFound(Uuid),

    #[error("Perfil de acesso desconhecido: '{0}'")]
    InvalidRole(String),

    #[error("Status de importação desconhecido: '{0}'")]
    InvalidImportStatus(String),

    #[error("Configuração inválida: {0}")]
    ConfigError(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro ao rodar migrações: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de serialização: {0}")]
    SerializationError(#[from] serde_json::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno: {0}")]
    InternalError(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_value() {
        let err = AppError::InvalidRole("gerente".into());
        assert_eq!(err.to_string(), "Perfil de acesso desconhecido: 'gerente'");

        let err = AppError::InvalidImportStatus("shipped".into());
        assert!(err.to_string().contains("shipped"));
    }

    #[test]
    fn anyhow_errors_convert_into_internal() {
        let err: AppError = anyhow::anyhow!("falhou").into();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
