//! Return metrics for single wallets and aggregated portfolios.

mod performance_model;
mod performance_service;

pub use performance_model::{CashFlow, WalletPerformance};
pub use performance_service::*;
