// src/models/credit.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::common::numeric;

// --- Enums (Mapeando o Postgres) ---

// Decisão da financeira sobre o pedido de crédito
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "credit_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    Pending,
    Approved,
    Rejected,
}

// Segunda etapa: o admin ajusta e trava o limite que o importador pode usar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "admin_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AdminStatus {
    #[default]
    Pending,
    Finalized,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CreditApplication {
    pub id: Uuid,
    pub user_id: Uuid,

    #[serde(default, deserialize_with = "numeric::lenient_decimal::deserialize")]
    pub requested_amount: Option<Decimal>,

    pub status: FinancialStatus,

    #[serde(default)]
    pub admin_status: AdminStatus,

    // Limite aprovado pela financeira
    #[serde(default, deserialize_with = "numeric::lenient_decimal::deserialize")]
    pub credit_limit: Option<Decimal>,

    // Limite definido na finalização do admin (pode diferir do original)
    #[serde(default, deserialize_with = "numeric::lenient_decimal::deserialize")]
    pub final_credit_limit: Option<Decimal>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CreditApplication {
    pub fn is_financially_approved(&self) -> bool {
        self.status == FinancialStatus::Approved
    }

    pub fn is_finalized(&self) -> bool {
        self.admin_status == AdminStatus::Finalized
    }

    /// O limite só pode ser usado depois da aprovação financeira E da finalização.
    pub fn is_usable(&self) -> bool {
        self.is_financially_approved() && self.is_finalized()
    }

    pub fn requested(&self) -> Decimal {
        numeric::or_zero(self.requested_amount)
    }

    pub fn original_limit(&self) -> Decimal {
        numeric::or_zero(self.credit_limit)
    }

    pub fn final_limit(&self) -> Decimal {
        numeric::or_zero(self.final_credit_limit)
    }

    /// Limite final, caindo para o original e depois para zero.
    pub fn effective_limit(&self) -> Decimal {
        self.final_credit_limit
            .or(self.credit_limit)
            .unwrap_or(Decimal::ZERO)
    }
}

// Indicadores de crédito exibidos nos dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditMetrics {
    pub total_requested: Decimal,
    pub total_approved: Decimal,
    pub utilization_rate: Decimal,
    pub pending_count: usize,
    pub approved_count: usize,
    pub finalized_count: usize,
    pub awaiting_finalization_count: usize,
}

// Uso do crédito pelas importações em andamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditUsage {
    pub used: Decimal,
    pub available: Decimal,
    pub limit: Decimal,
}
