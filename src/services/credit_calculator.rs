// src/services/credit_calculator.rs

use rust_decimal::Decimal;
use std::collections::HashSet;
use uuid::Uuid;

use crate::{
    models::{
        auth::Role,
        credit::{CreditApplication, CreditMetrics, CreditUsage, FinancialStatus},
        import::Import,
    },
    services::import_lifecycle,
};

/// Regra de visibilidade do total aprovado. Cada perfil enxerga um número diferente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditVisibility {
    /// Financeira: limite original de tudo que ela aprovou, ignora a finalização.
    FinancialApproval,
    /// Admin: limite final quando finalizado, senão o original.
    AdminLive,
    /// Importador e demais: só o limite final do que já foi finalizado.
    FinalizedOnly,
}

impl CreditVisibility {
    /// Quanto da solicitação entra no total aprovado (`None` = invisível).
    pub fn approved_amount(self, app: &CreditApplication) -> Option<Decimal> {
        if !app.is_financially_approved() {
            return None;
        }

        match self {
            CreditVisibility::FinancialApproval => Some(app.original_limit()),
            CreditVisibility::AdminLive if app.is_finalized() => Some(app.final_limit()),
            CreditVisibility::AdminLive => Some(app.original_limit()),
            CreditVisibility::FinalizedOnly if app.is_finalized() => Some(app.final_limit()),
            CreditVisibility::FinalizedOnly => None,
        }
    }
}

impl Role {
    pub fn credit_visibility(self) -> CreditVisibility {
        match self {
            Role::Financeira => CreditVisibility::FinancialApproval,
            Role::Admin => CreditVisibility::AdminLive,
            Role::Importer | Role::SuperAdmin | Role::Inactive => CreditVisibility::FinalizedOnly,
        }
    }
}

// Soma sem risco de panic por overflow
fn sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

pub fn calculate_credit_metrics(applications: &[CreditApplication], role: Role) -> CreditMetrics {
    let visibility = role.credit_visibility();

    let total_requested = sum(applications.iter().map(CreditApplication::requested));
    let total_approved = sum(
        applications
            .iter()
            .filter_map(|app| visibility.approved_amount(app)),
    );

    let utilization_rate = if total_approved.is_zero() {
        Decimal::ZERO
    } else {
        total_requested
            .checked_div(total_approved)
            .unwrap_or(Decimal::ZERO)
    };

    let count = |pred: fn(&CreditApplication) -> bool| applications.iter().filter(|&a| pred(a)).count();

    CreditMetrics {
        total_requested,
        total_approved,
        utilization_rate,
        pending_count: count(|a| a.status == FinancialStatus::Pending),
        approved_count: count(CreditApplication::is_financially_approved),
        finalized_count: count(CreditApplication::is_usable),
        awaiting_finalization_count: count(|a| a.is_financially_approved() && !a.is_finalized()),
    }
}

/// Crédito usado pelas importações em andamento contra o limite finalizado.
///
/// O perfil não altera o resultado; o parâmetro existe para manter a mesma
/// assinatura de [`calculate_credit_metrics`].
pub fn calculate_credit_usage(
    applications: &[CreditApplication],
    imports: &[Import],
    _role: Role,
) -> CreditUsage {
    let eligible: Vec<&CreditApplication> = applications.iter().filter(|a| a.is_usable()).collect();

    if eligible.is_empty() {
        return CreditUsage::default();
    }

    let limit = sum(eligible.iter().map(|a| a.effective_limit()));

    let eligible_ids: HashSet<Uuid> = eligible.iter().map(|a| a.id).collect();
    let used = sum(
        imports
            .iter()
            .filter(|imp| {
                imp.credit_application_id
                    .is_some_and(|id| eligible_ids.contains(&id))
            })
            // Concluídas e canceladas já liberaram o crédito
            .filter(|imp| !import_lifecycle::is_final(&imp.status))
            .map(Import::value),
    );

    let available = limit.saturating_sub(used).max(Decimal::ZERO);

    CreditUsage { used, available, limit }
}
