//! Wallet domain models.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fx::Currency;

/// One wallet's observed state at a point in time.
///
/// Snapshots are immutable once created; correction edits happen in the
/// owning application layer. Dates are unique within a wallet, and every
/// consumer sorts by date before use, so storage order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub id: Uuid,
    pub snapshot_date: NaiveDate,
    pub portfolio_value: Decimal,
    pub monthly_deposit: Decimal,
    pub monthly_withdrawal: Decimal,
    pub monthly_earnings: Decimal,
    pub notes: Option<String>,
}

impl WalletSnapshot {
    /// Creates a snapshot with zeroed cash-flow fields.
    pub fn new(snapshot_date: NaiveDate, portfolio_value: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            snapshot_date,
            portfolio_value,
            monthly_deposit: Decimal::ZERO,
            monthly_withdrawal: Decimal::ZERO,
            monthly_earnings: Decimal::ZERO,
            notes: None,
        }
    }

    /// Net capital movement recorded on this snapshot: deposits minus
    /// withdrawals.
    pub fn net_cash_flow(&self) -> Decimal {
        self.monthly_deposit - self.monthly_withdrawal
    }
}

/// An investment wallet: a named series of periodic value snapshots in a
/// single currency.
///
/// All aggregate quantities are derived on demand from the snapshot
/// collection so they can never go stale against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub currency: Currency,
    pub snapshots: Vec<WalletSnapshot>,
}

impl Wallet {
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            currency,
            snapshots: Vec::new(),
        }
    }

    pub fn add_snapshot(&mut self, snapshot: WalletSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Snapshots in ascending date order.
    pub fn sorted_snapshots(&self) -> Vec<WalletSnapshot> {
        let mut sorted = self.snapshots.clone();
        sorted.sort_by_key(|s| s.snapshot_date);
        sorted
    }

    /// Date of the earliest snapshot, if any.
    pub fn first_snapshot_date(&self) -> Option<NaiveDate> {
        self.snapshots.iter().map(|s| s.snapshot_date).min()
    }

    /// Date of the latest snapshot, if any.
    pub fn last_snapshot_date(&self) -> Option<NaiveDate> {
        self.snapshots.iter().map(|s| s.snapshot_date).max()
    }

    /// Portfolio value of the latest snapshot, zero for an empty wallet.
    pub fn current_value(&self) -> Decimal {
        self.snapshots
            .iter()
            .max_by_key(|s| s.snapshot_date)
            .map(|s| s.portfolio_value)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of recorded deposits across all snapshots.
    pub fn total_deposits(&self) -> Decimal {
        self.snapshots.iter().map(|s| s.monthly_deposit).sum()
    }

    /// Sum of recorded withdrawals across all snapshots.
    pub fn total_withdrawals(&self) -> Decimal {
        self.snapshots.iter().map(|s| s.monthly_withdrawal).sum()
    }

    /// Sum of recorded earnings across all snapshots.
    pub fn total_earnings(&self) -> Decimal {
        self.snapshots.iter().map(|s| s.monthly_earnings).sum()
    }

    /// Deposits minus withdrawals across all snapshots.
    pub fn net_contributions(&self) -> Decimal {
        self.total_deposits() - self.total_withdrawals()
    }

    /// Overall return rate in percent at scale 4: value gained over net
    /// invested capital. Zero when net contributions are not positive.
    pub fn return_rate(&self) -> Decimal {
        let net = self.net_contributions();
        if net <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        ((self.current_value() - net) / net * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
    }
}
