//! Goal projection calculations.
//!
//! Same quiet error policy as the return metrics: degenerate input reports
//! zero or [`GoalHorizon::Unreachable`], never an error. Only currency
//! conversion can fail here, and it fails loudly.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::projection_model::{GoalHorizon, GoalProjection};
use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::portfolio::performance::{calculate_cagr, calculate_real_cagr};
use crate::wallets::Wallet;

/// Rates below this magnitude are treated as zero growth.
const ZERO_RATE_EPSILON: f64 = 1e-12;
/// Hard ceiling on projected months; anything beyond it is "unreachable".
const MAX_PROJECTION_MONTHS: f64 = 1200.0;
/// Bisection refinement steps; enough for sub-month precision at the
/// ceiling scale.
const BISECTION_ITERATIONS: u32 = 80;
/// Slack, in currency units, allowed when testing the ceiling value.
const TARGET_TOLERANCE: f64 = 0.5;

/// Future value of a balance plus a constant monthly contribution after
/// `months` periods of compounding at `monthly_rate`.
pub fn future_value(current: f64, monthly: f64, monthly_rate: f64, months: f64) -> f64 {
    let factor = (1.0 + monthly_rate).powf(months);
    if monthly_rate.abs() < ZERO_RATE_EPSILON {
        current * factor + monthly * months
    } else {
        current * factor + monthly * ((factor - 1.0) / monthly_rate)
    }
}

/// Smallest number of whole months after which the annuity future value
/// reaches `target`.
///
/// Already-achieved targets report zero months. A near-zero rate falls back
/// to the linear estimate, reporting [`GoalHorizon::Unreachable`] when the
/// contribution cannot close the gap. Otherwise the answer comes from
/// bisection over [0, 1200] months; a target the ceiling value cannot reach
/// is unreachable rather than a number.
pub fn estimate_months_to_target(
    current: f64,
    monthly_contribution: f64,
    monthly_rate: f64,
    target: f64,
) -> GoalHorizon {
    if current >= target {
        return GoalHorizon::Months(0);
    }

    if monthly_rate.abs() < ZERO_RATE_EPSILON {
        if monthly_contribution <= 0.0 {
            return GoalHorizon::Unreachable;
        }
        let months = ((target - current) / monthly_contribution).max(0.0);
        if months > MAX_PROJECTION_MONTHS {
            return GoalHorizon::Unreachable;
        }
        return GoalHorizon::Months(months.ceil() as u32);
    }

    let mut low = 0.0_f64;
    let mut high = MAX_PROJECTION_MONTHS;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = (low + high) / 2.0;
        if future_value(current, monthly_contribution, monthly_rate, mid) >= target {
            high = mid;
        } else {
            low = mid;
        }
    }

    if future_value(current, monthly_contribution, monthly_rate, high) < target - TARGET_TOLERANCE {
        return GoalHorizon::Unreachable;
    }

    GoalHorizon::Months(high.ceil() as u32)
}

/// Inclusive span of calendar months between two observation dates,
/// never less than one.
pub fn observed_months(first: NaiveDate, last: NaiveDate) -> i64 {
    let months = (i64::from(last.year()) - i64::from(first.year())) * 12
        + (i64::from(last.month()) - i64::from(first.month()));
    (months + 1).max(1)
}

/// Empirical average contribution per observed month.
pub fn average_monthly_contribution(
    total_net_contributions: Decimal,
    observed_months: i64,
) -> Decimal {
    if total_net_contributions <= Decimal::ZERO || observed_months <= 0 {
        return Decimal::ZERO;
    }
    (total_net_contributions / Decimal::from(observed_months))
        .round_dp_with_strategy(DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Monthly growth rate implied by the observation window: the CAGR of the
/// current balance over total contributions, deflated by annual inflation,
/// taken to the twelfth root.
pub fn estimate_monthly_return(
    observed_months: i64,
    total_net_contributions: Decimal,
    current_balance: Decimal,
    annual_inflation: Decimal,
) -> f64 {
    if observed_months <= 0
        || total_net_contributions <= Decimal::ZERO
        || current_balance <= Decimal::ZERO
    {
        return 0.0;
    }

    let years = observed_months as f64 / 12.0;
    let annual = calculate_cagr(total_net_contributions, current_balance, years);
    let real_annual = calculate_real_cagr(annual, annual_inflation)
        .to_f64()
        .unwrap_or(0.0);

    (1.0 + real_annual).powf(1.0 / 12.0) - 1.0
}

/// Projects when the combined wallets reach `target` in the reporting
/// currency.
///
/// Wallets without snapshots are skipped; conversion failures propagate.
pub fn project_goal(
    wallets: &[Wallet],
    fx: &dyn FxServiceTrait,
    target: Decimal,
    annual_inflation: Decimal,
) -> Result<GoalProjection> {
    let mut combined_balance = Decimal::ZERO;
    let mut combined_contributions = Decimal::ZERO;
    let mut first_date: Option<NaiveDate> = None;
    let mut last_date: Option<NaiveDate> = None;

    for wallet in wallets {
        let (Some(first), Some(last)) = (wallet.first_snapshot_date(), wallet.last_snapshot_date())
        else {
            continue;
        };

        combined_balance += fx.convert_to_reporting(wallet.current_value(), wallet.currency)?;
        combined_contributions +=
            fx.convert_to_reporting(wallet.net_contributions(), wallet.currency)?;

        first_date = Some(first_date.map_or(first, |d: NaiveDate| d.min(first)));
        last_date = Some(last_date.map_or(last, |d: NaiveDate| d.max(last)));
    }

    let months = match (first_date, last_date) {
        (Some(first), Some(last)) => observed_months(first, last),
        _ => 1,
    };

    let monthly_contribution = average_monthly_contribution(combined_contributions, months);
    let monthly_return = estimate_monthly_return(
        months,
        combined_contributions,
        combined_balance,
        annual_inflation,
    );

    let horizon = estimate_months_to_target(
        combined_balance.to_f64().unwrap_or(0.0),
        monthly_contribution.to_f64().unwrap_or(0.0),
        monthly_return,
        target.to_f64().unwrap_or(0.0),
    );

    Ok(GoalProjection {
        target,
        current_balance: combined_balance,
        average_monthly_contribution: monthly_contribution,
        monthly_return,
        horizon,
    })
}
