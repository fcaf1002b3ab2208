// src/lib.rs

// Núcleo do Spark Comex: ciclo de vida das importações e cálculo de crédito.
// O binário (main.rs) só monta o estado e roda o relatório dos dashboards.

pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
