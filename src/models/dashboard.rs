// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    auth::Role,
    credit::{CreditApplication, CreditMetrics, CreditUsage},
    import::Import,
};

// Fotografia consistente dos dados de um usuário (lida numa única transação)
#[derive(Debug, Clone, Default)]
pub struct CreditSnapshot {
    pub applications: Vec<CreditApplication>,
    pub imports: Vec<Import>,
}

// Contagem das importações por grupo de status (cards do topo)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total: usize,
    pub active: usize,
    pub in_transport: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub unknown_status: usize,
    pub active_value: Decimal, // Soma das importações ainda não finalizadas
}

// O que o dashboard de crédito exibe para um usuário
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditDashboard {
    pub user_id: Uuid,
    pub role: Role,
    pub metrics: CreditMetrics,
    pub usage: CreditUsage,
    pub imports: ImportSummary,
}
