pub mod auth;
pub mod credit;
pub mod dashboard;
pub mod import;
