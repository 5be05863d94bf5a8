//! Return metric calculations.
//!
//! All functions here are pure and total: insufficient or degenerate input
//! yields a neutral zero (or an omitted map entry) so a missing metric
//! degrades the display instead of crashing the caller. Divisions run at
//! [`DECIMAL_PRECISION`]; fractional powers and the XIRR iteration run on
//! `f64` and the result is brought back to `Decimal` at the working scale.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use super::performance_model::{CashFlow, WalletPerformance};
use crate::constants::DECIMAL_PRECISION;
use crate::portfolio::timeseries::PortfolioPoint;
use crate::wallets::{Wallet, WalletSnapshot};

const XIRR_INITIAL_GUESS: f64 = 0.10;
const XIRR_MAX_ITERATIONS: u32 = 100;
const XIRR_TOLERANCE: f64 = 1e-7;
const XIRR_DERIVATIVE_FLOOR: f64 = 1e-10;
/// A rate at or below -100% or above 1000% signals degenerate input, not a
/// real answer; Newton steps are clamped into this range.
const XIRR_RATE_MIN: f64 = -0.999;
const XIRR_RATE_MAX: f64 = 10.0;

fn round_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

fn decimal_from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).map(round_dp).unwrap_or(Decimal::ZERO)
}

/// Compound annual growth rate: `(end / start)^(1 / years) - 1`.
///
/// CAGR is undefined for a non-positive start value or period; those inputs
/// report a neutral zero rather than an error.
pub fn calculate_cagr(start_value: Decimal, end_value: Decimal, years: f64) -> Decimal {
    if start_value <= Decimal::ZERO || years <= 0.0 {
        return Decimal::ZERO;
    }

    let ratio = round_dp(end_value / start_value).to_f64().unwrap_or(0.0);
    decimal_from_f64(ratio.powf(1.0 / years) - 1.0)
}

/// Inflation-adjusted growth rate: `(1 + nominal) / (1 + inflation) - 1`.
pub fn calculate_real_cagr(nominal_cagr: Decimal, inflation_rate: Decimal) -> Decimal {
    let denominator = Decimal::ONE + inflation_rate;
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_dp((Decimal::ONE + nominal_cagr) / denominator - Decimal::ONE)
}

/// Simple return over contributed capital:
/// `(current - contributions) / contributions`.
pub fn calculate_simple_return(total_contributions: Decimal, current_value: Decimal) -> Decimal {
    if total_contributions <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_dp((current_value - total_contributions) / total_contributions)
}

/// Time-weighted return over one wallet's snapshot series.
///
/// Chains sub-period returns with each period's begin value adjusted by the
/// cash flow recorded on its closing snapshot, so a deposit does not read as
/// organic growth. Periods with a non-positive begin value are skipped.
/// Needs at least two snapshots.
pub fn calculate_twr(snapshots: &[WalletSnapshot]) -> Decimal {
    if snapshots.len() < 2 {
        return Decimal::ZERO;
    }

    let mut sorted: Vec<&WalletSnapshot> = snapshots.iter().collect();
    sorted.sort_by_key(|s| s.snapshot_date);

    let mut product = 1.0_f64;
    for pair in sorted.windows(2) {
        let begin_value = pair[0].portfolio_value + pair[1].net_cash_flow();
        if begin_value > Decimal::ZERO {
            let period_return = round_dp((pair[1].portfolio_value - begin_value) / begin_value)
                .to_f64()
                .unwrap_or(0.0);
            product *= 1.0 + period_return;
        }
    }

    decimal_from_f64(product - 1.0)
}

/// Time-weighted return over an aggregated portfolio series.
///
/// Identical chaining to [`calculate_twr`], applied to the carry-forward
/// aggregate so all wallets and currencies blend into one figure.
pub fn calculate_aggregated_twr(series: &BTreeMap<NaiveDate, PortfolioPoint>) -> Decimal {
    if series.len() < 2 {
        return Decimal::ZERO;
    }

    let points: Vec<&PortfolioPoint> = series.values().collect();

    let mut product = 1.0_f64;
    for pair in points.windows(2) {
        let begin_value = pair[0].balance + pair[1].cash_flow;
        if begin_value > Decimal::ZERO {
            let period_return = round_dp((pair[1].balance - begin_value) / begin_value)
                .to_f64()
                .unwrap_or(0.0);
            product *= 1.0 + period_return;
        }
    }

    decimal_from_f64(product - 1.0)
}

/// Percent return per calendar year.
///
/// Within each year the return runs from the year's first to its last
/// snapshot, with every later snapshot's net flow added to the start value.
/// Years with fewer than two snapshots are omitted entirely.
pub fn calculate_yearly_returns(snapshots: &[WalletSnapshot]) -> BTreeMap<i32, Decimal> {
    let mut by_year: BTreeMap<i32, Vec<&WalletSnapshot>> = BTreeMap::new();
    for snapshot in snapshots {
        by_year
            .entry(snapshot.snapshot_date.year())
            .or_default()
            .push(snapshot);
    }

    let mut result = BTreeMap::new();
    for (year, mut year_snapshots) in by_year {
        if year_snapshots.len() < 2 {
            continue;
        }
        year_snapshots.sort_by_key(|s| s.snapshot_date);
        result.insert(
            year,
            round_dp(period_return_with_flows(&year_snapshots) * Decimal::ONE_HUNDRED),
        );
    }
    result
}

/// Percent return per "YYYY-MM" month, for heatmap-style breakdowns.
///
/// Each consecutive snapshot pair is attributed to the later snapshot's
/// month; pairs whose previous or cash-flow-adjusted value is not positive
/// are omitted. Needs at least two snapshots.
pub fn calculate_monthly_returns(snapshots: &[WalletSnapshot]) -> BTreeMap<String, Decimal> {
    if snapshots.len() < 2 {
        return BTreeMap::new();
    }

    let mut sorted: Vec<&WalletSnapshot> = snapshots.iter().collect();
    sorted.sort_by_key(|s| s.snapshot_date);

    let mut result = BTreeMap::new();
    for pair in sorted.windows(2) {
        let prev_value = pair[0].portfolio_value;
        if prev_value <= Decimal::ZERO {
            continue;
        }
        let adjusted_prev = prev_value + pair[1].net_cash_flow();
        if adjusted_prev <= Decimal::ZERO {
            continue;
        }

        let key = format!(
            "{}-{:02}",
            pair[1].snapshot_date.year(),
            pair[1].snapshot_date.month()
        );
        let return_pct = round_dp((pair[1].portfolio_value - adjusted_prev) / adjusted_prev)
            * Decimal::ONE_HUNDRED;
        result.insert(key, return_pct);
    }
    result
}

/// Percent return for one calendar year, or for one month of it when
/// `month` is given.
///
/// Empty selections and non-positive adjusted start values report zero.
pub fn calculate_period_return(
    snapshots: &[WalletSnapshot],
    year: i32,
    month: Option<u32>,
) -> Decimal {
    let mut selected: Vec<&WalletSnapshot> = snapshots
        .iter()
        .filter(|s| {
            s.snapshot_date.year() == year
                && month.map_or(true, |m| s.snapshot_date.month() == m)
        })
        .collect();

    if selected.is_empty() {
        return Decimal::ZERO;
    }
    selected.sort_by_key(|s| s.snapshot_date);

    round_dp(period_return_with_flows(&selected) * Decimal::ONE_HUNDRED)
}

/// Cash-flow-adjusted return from the first to the last snapshot of an
/// ordered, non-empty group. The first snapshot's own flow is already
/// reflected in its value, so only later flows adjust the start.
fn period_return_with_flows(ordered: &[&WalletSnapshot]) -> Decimal {
    let start_value = ordered[0].portfolio_value;
    let end_value = ordered[ordered.len() - 1].portfolio_value;

    let total_cash_flow: Decimal = ordered[1..].iter().map(|s| s.net_cash_flow()).sum();

    let adjusted_start = start_value + total_cash_flow;
    if adjusted_start <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_dp((end_value - adjusted_start) / adjusted_start)
}

/// Derives the XIRR cash-flow series from a wallet's snapshots.
///
/// Every snapshot with a non-zero net flow becomes a flow of the negated
/// amount (capital movement is an outflow from the investor's viewpoint);
/// the last snapshot's portfolio value closes the series as a positive
/// inflow.
pub fn snapshots_to_cash_flows(snapshots: &[WalletSnapshot]) -> Vec<CashFlow> {
    if snapshots.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&WalletSnapshot> = snapshots.iter().collect();
    sorted.sort_by_key(|s| s.snapshot_date);

    let mut cash_flows: Vec<CashFlow> = sorted
        .iter()
        .filter(|s| !s.net_cash_flow().is_zero())
        .map(|s| CashFlow {
            date: s.snapshot_date,
            amount: -s.net_cash_flow(),
        })
        .collect();

    let last = sorted[sorted.len() - 1];
    cash_flows.push(CashFlow {
        date: last.snapshot_date,
        amount: last.portfolio_value,
    });

    cash_flows
}

/// Money-weighted return: the rate at which the dated cash-flow series
/// discounts to zero, found with Newton-Raphson.
///
/// Year fractions are `days / 365` from the earliest flow. When the
/// iteration ceiling is hit, or the derivative collapses, the current
/// estimate is returned rather than an error. Needs at least two flows.
pub fn calculate_xirr(cash_flows: &[CashFlow]) -> Decimal {
    if cash_flows.len() < 2 {
        return Decimal::ZERO;
    }

    let mut sorted: Vec<&CashFlow> = cash_flows.iter().collect();
    sorted.sort_by_key(|cf| cf.date);
    let first_date = sorted[0].date;

    let flows: Vec<(f64, f64)> = sorted
        .iter()
        .map(|cf| {
            let years = (cf.date - first_date).num_days() as f64 / 365.0;
            (years, cf.amount.to_f64().unwrap_or(0.0))
        })
        .collect();

    let mut rate = XIRR_INITIAL_GUESS;

    for _ in 0..XIRR_MAX_ITERATIONS {
        let mut npv = 0.0_f64;
        let mut npv_derivative = 0.0_f64;

        for (years, amount) in &flows {
            let factor = (1.0 + rate).powf(*years);
            npv += amount / factor;
            npv_derivative -= years * amount / (factor * (1.0 + rate));
        }

        if npv.abs() < XIRR_TOLERANCE {
            return decimal_from_f64(rate);
        }
        if npv_derivative.abs() < XIRR_DERIVATIVE_FLOOR {
            break;
        }

        rate = (rate - npv / npv_derivative).clamp(XIRR_RATE_MIN, XIRR_RATE_MAX);
    }

    decimal_from_f64(rate)
}

/// Assembles the full metric bundle for one wallet.
pub fn calculate_wallet_performance(wallet: &Wallet) -> WalletPerformance {
    let snapshots = wallet.sorted_snapshots();
    let cash_flows = snapshots_to_cash_flows(&snapshots);

    WalletPerformance {
        wallet_id: wallet.id,
        currency: wallet.currency,
        current_value: wallet.current_value(),
        net_contributions: wallet.net_contributions(),
        simple_return: calculate_simple_return(wallet.net_contributions(), wallet.current_value()),
        time_weighted_return: calculate_twr(&snapshots),
        money_weighted_return: calculate_xirr(&cash_flows),
        yearly_returns: calculate_yearly_returns(&snapshots),
        monthly_returns: calculate_monthly_returns(&snapshots),
    }
}
