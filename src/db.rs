pub mod user_repo;
pub use user_repo::UserRepository;
pub mod credit_repo;
pub use credit_repo::CreditRepository;
pub mod import_repo;
pub use import_repo::ImportRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
