//! Performance domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::fx::Currency;

/// A dated, signed cash movement used for money-weighted return.
///
/// Contributions are negative (outflows from the investor's perspective) and
/// the terminal valuation is a positive inflow. Constructed fresh per
/// calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Per-wallet metric bundle handed to the reporting layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletPerformance {
    pub wallet_id: Uuid,
    pub currency: Currency,
    pub current_value: Decimal,
    pub net_contributions: Decimal,
    pub simple_return: Decimal,
    pub time_weighted_return: Decimal,
    pub money_weighted_return: Decimal,
    /// Percent return per calendar year; years with fewer than two
    /// snapshots are absent.
    pub yearly_returns: BTreeMap<i32, Decimal>,
    /// Percent return per "YYYY-MM" month key.
    pub monthly_returns: BTreeMap<String, Decimal>,
}
