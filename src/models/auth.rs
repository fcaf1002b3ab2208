// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::common::error::AppError;

// Perfis de acesso (mapeia o enum `user_role` do Postgres)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Financeira, // Aprovação financeira do crédito
    Importer,
    SuperAdmin,
    Inactive,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Financeira,
        Role::Importer,
        Role::SuperAdmin,
        Role::Inactive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Financeira => "financeira",
            Role::Importer => "importer",
            Role::SuperAdmin => "super_admin",
            Role::Inactive => "inactive",
        }
    }

    /// Perfis que enxergam as solicitações e importações de todos os usuários.
    /// Os demais só recebem os próprios registros da camada de dados.
    pub fn sees_all_records(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin | Role::Financeira)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AppError::InvalidRole(s.to_string()))
    }
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub company_name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_role() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!(" financeira ".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "gerente".parse::<Role>().unwrap_err();
        assert!(matches!(err, AppError::InvalidRole(r) if r == "gerente"));
    }

    #[test]
    fn only_back_office_sees_everything() {
        assert!(Role::Admin.sees_all_records());
        assert!(Role::SuperAdmin.sees_all_records());
        assert!(Role::Financeira.sees_all_records());
        assert!(!Role::Importer.sees_all_records());
        assert!(!Role::Inactive.sees_all_records());
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"super_admin\"");
        let role: Role = serde_json::from_str("\"financeira\"").unwrap();
        assert_eq!(role, Role::Financeira);
    }
}
