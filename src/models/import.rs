// src/models/import.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::common::{error::AppError, numeric};

// --- Enums ---

/// Etapas do processo de importação, na ordem em que aparecem na linha do tempo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    Planning,
    Production,
    DeliveredToAgent,
    MaritimeTransport,
    AirTransport,
    CustomsClearance,
    NationalTransport,
    Completed,
    Cancelled,
}

impl ImportStatus {
    pub const ORDER: [ImportStatus; 9] = [
        ImportStatus::Planning,
        ImportStatus::Production,
        ImportStatus::DeliveredToAgent,
        ImportStatus::MaritimeTransport,
        ImportStatus::AirTransport,
        ImportStatus::CustomsClearance,
        ImportStatus::NationalTransport,
        ImportStatus::Completed,
        ImportStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImportStatus::Planning => "planning",
            ImportStatus::Production => "production",
            ImportStatus::DeliveredToAgent => "delivered_to_agent",
            ImportStatus::MaritimeTransport => "maritime_transport",
            ImportStatus::AirTransport => "air_transport",
            ImportStatus::CustomsClearance => "customs_clearance",
            ImportStatus::NationalTransport => "national_transport",
            ImportStatus::Completed => "completed",
            ImportStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImportStatus::ORDER
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::InvalidImportStatus(s.to_string()))
    }
}

/// Modal de embarque. Qualquer valor diferente de "air" (exato) é tratado como marítimo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Air,
    #[default]
    Sea,
}

impl ShippingMethod {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("air") => ShippingMethod::Air,
            _ => ShippingMethod::Sea,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShippingMethod::Air => "air",
            ShippingMethod::Sea => "sea",
        }
    }
}

/// Token de cor usado pela interface para os badges de status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Neutral,
    Blue,
    Amber,
    Purple,
    Cyan,
    Sky,
    Orange,
    Indigo,
    Green,
    Red,
}

// --- Structs ---

// O status fica como texto cru: dados legados com status desconhecido
// precisam continuar sendo exibidos.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Import {
    pub id: Uuid,
    pub user_id: Uuid,

    // Vínculo opcional com a linha de crédito
    pub credit_application_id: Option<Uuid>,

    #[serde(default)]
    pub import_name: String,

    #[serde(default, deserialize_with = "numeric::lenient_decimal::deserialize")]
    pub total_value: Option<Decimal>,

    pub status: String,
    pub shipping_method: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Import {
    pub fn parsed_status(&self) -> Option<ImportStatus> {
        self.status.parse().ok()
    }

    pub fn shipping_method(&self) -> ShippingMethod {
        ShippingMethod::from_raw(self.shipping_method.as_deref())
    }

    pub fn value(&self) -> Decimal {
        numeric::or_zero(self.total_value)
    }
}
