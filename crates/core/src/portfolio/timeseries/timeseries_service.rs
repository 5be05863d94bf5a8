//! Carry-forward aggregation of wallet snapshot series.

use chrono::NaiveDate;
use rayon::prelude::*;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::timeseries_model::PortfolioPoint;
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::wallets::{Wallet, WalletSnapshot};

/// Merges every wallet's snapshot series into one chronological series of
/// aggregate (balance, cash flow) points in the reporting currency.
///
/// Wallets are observed on independent, possibly sparse schedules. On a date
/// where a wallet has no snapshot, its last known converted balance is
/// carried forward and it contributes zero cash flow; without this, the
/// aggregate balance would drop whenever any single wallet lacks a same-day
/// observation. A wallet with no snapshots contributes zero balance and zero
/// flow throughout, which sums identically to leaving it out until its first
/// observation.
///
/// Conversion failures propagate: an aggregate built on a silently wrong
/// conversion would be worse than no aggregate at all.
pub fn build_aggregated_time_series(
    wallets: &[Wallet],
    fx: &dyn FxServiceTrait,
) -> Result<BTreeMap<NaiveDate, PortfolioPoint>> {
    let dates: BTreeSet<NaiveDate> = wallets
        .iter()
        .flat_map(|w| w.snapshots.iter().map(|s| s.snapshot_date))
        .collect();

    if dates.is_empty() {
        return Ok(BTreeMap::new());
    }

    let dates: Vec<NaiveDate> = dates.into_iter().collect();

    // Wallets do not share state, so each carry-forward walk runs in
    // parallel and the columns are summed afterwards.
    let columns: Vec<Vec<(Decimal, Decimal)>> = wallets
        .par_iter()
        .map(|wallet| wallet_column(wallet, &dates, fx))
        .collect::<Result<_>>()?;

    let mut series = BTreeMap::new();
    for (idx, date) in dates.iter().enumerate() {
        let mut balance = Decimal::ZERO;
        let mut cash_flow = Decimal::ZERO;
        for column in &columns {
            balance += column[idx].0;
            cash_flow += column[idx].1;
        }
        series.insert(
            *date,
            PortfolioPoint {
                date: *date,
                balance,
                cash_flow,
            },
        );
    }

    Ok(series)
}

/// One wallet's converted (balance, cash flow) for every aggregate date,
/// carry-forward filled on the dates the wallet was not observed.
fn wallet_column(
    wallet: &Wallet,
    dates: &[NaiveDate],
    fx: &dyn FxServiceTrait,
) -> Result<Vec<(Decimal, Decimal)>> {
    // Snapshot dates are unique per wallet; if that is ever violated the
    // last snapshot in the series wins the index.
    let by_date: HashMap<NaiveDate, &WalletSnapshot> = wallet
        .snapshots
        .iter()
        .map(|s| (s.snapshot_date, s))
        .collect();

    let mut last_known_balance = Decimal::ZERO;
    let mut column = Vec::with_capacity(dates.len());

    for date in dates {
        match by_date.get(date) {
            Some(snapshot) => {
                let balance =
                    fx.convert_to_reporting(snapshot.portfolio_value, wallet.currency)?;
                let cash_flow =
                    fx.convert_to_reporting(snapshot.net_cash_flow(), wallet.currency)?;
                last_known_balance = balance;
                column.push((balance, cash_flow));
            }
            None => {
                // No observation: the wallet neither grew nor moved cash
                // on this date.
                column.push((last_known_balance, Decimal::ZERO));
            }
        }
    }

    Ok(column)
}
