pub mod credit_calculator;
pub mod dashboard_service;
pub mod import_lifecycle;

pub use dashboard_service::{DashboardService, SnapshotSource};
