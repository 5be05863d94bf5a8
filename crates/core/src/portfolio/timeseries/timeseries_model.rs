//! Aggregated time-series domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One date's aggregate across all wallets, in the reporting currency.
///
/// Rebuilt per calculation; never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPoint {
    pub date: NaiveDate,
    /// Sum of every wallet's balance on this date, carry-forward filled.
    pub balance: Decimal,
    /// Sum of the net cash flows recorded on this date.
    pub cash_flow: Decimal,
}
