//! Wallets module - investment wallet domain models.

mod wallets_model;

pub use wallets_model::{Wallet, WalletSnapshot};

#[cfg(test)]
mod wallets_model_tests;
