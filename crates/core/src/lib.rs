//! Walletfolio Core - Portfolio return analytics engine.
//!
//! This crate contains the pure computation layer for Walletfolio: currency
//! normalization, multi-wallet time-series aggregation with carry-forward,
//! return metrics (CAGR, TWR, XIRR, yearly/monthly breakdowns), and goal
//! projection. It performs no I/O and persists nothing; callers supply
//! wallet data and consume the results synchronously.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod portfolio;
pub mod wallets;

// Re-export common types from wallet and portfolio modules
pub use portfolio::*;
pub use wallets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
