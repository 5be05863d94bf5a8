//! Unit tests for goal projection.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::fx::{Currency, FxService};
use crate::wallets::{Wallet, WalletSnapshot};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn snapshot_with_deposit(y: i32, m: u32, d: u32, value: Decimal, deposit: Decimal) -> WalletSnapshot {
    let mut s = WalletSnapshot::new(date(y, m, d), value);
    s.monthly_deposit = deposit;
    s
}

// ============================================================================
// Future value
// ============================================================================

#[test]
fn test_future_value_linear_without_growth() {
    assert_eq!(future_value(0.0, 100.0, 0.0, 12.0), 1200.0);
    assert_eq!(future_value(500.0, 100.0, 0.0, 12.0), 1700.0);
}

#[test]
fn test_future_value_compounds_the_balance() {
    let value = future_value(1000.0, 0.0, 0.01, 12.0);
    assert!((value - 1126.825).abs() < 0.01);
}

#[test]
fn test_future_value_compounds_contributions() {
    // 100 a month at 1% for 12 months: 100 * ((1.01^12 - 1) / 0.01).
    let value = future_value(0.0, 100.0, 0.01, 12.0);
    assert!((value - 1268.25).abs() < 0.01);
}

// ============================================================================
// Months to target
// ============================================================================

#[test]
fn test_achieved_target_needs_zero_months() {
    assert_eq!(
        estimate_months_to_target(1000.0, 0.0, 0.0, 1000.0),
        GoalHorizon::Months(0)
    );
    assert_eq!(
        estimate_months_to_target(2000.0, 100.0, 0.01, 1000.0),
        GoalHorizon::Months(0)
    );
}

#[test]
fn test_unreachable_without_growth_or_contribution() {
    assert_eq!(
        estimate_months_to_target(0.0, 0.0, 0.0, 1000.0),
        GoalHorizon::Unreachable
    );
    assert_eq!(
        estimate_months_to_target(0.0, -50.0, 0.0, 1000.0),
        GoalHorizon::Unreachable
    );
}

#[test]
fn test_linear_estimate_without_growth() {
    assert_eq!(
        estimate_months_to_target(0.0, 100.0, 0.0, 1000.0),
        GoalHorizon::Months(10)
    );
    // Partial months round up.
    assert_eq!(
        estimate_months_to_target(0.0, 100.0, 0.0, 1050.0),
        GoalHorizon::Months(11)
    );
}

#[test]
fn test_linear_estimate_beyond_ceiling_is_unreachable() {
    assert_eq!(
        estimate_months_to_target(0.0, 1.0, 0.0, 10_000.0),
        GoalHorizon::Unreachable
    );
}

#[test]
fn test_bisection_matches_closed_form() {
    // 100 a month at 1%: the annuity doubles the contribution sum at
    // t = ln(2) / ln(1.01) ~ 69.66 months.
    assert_eq!(
        estimate_months_to_target(0.0, 100.0, 0.01, 10_000.0),
        GoalHorizon::Months(70)
    );
}

#[test]
fn test_ceiling_value_short_of_target_is_unreachable() {
    assert_eq!(
        estimate_months_to_target(0.0, 1.0, 0.0001, 1_000_000.0),
        GoalHorizon::Unreachable
    );
}

#[test]
fn test_horizon_formatting() {
    assert_eq!(GoalHorizon::Months(0).to_string(), "0 mos");
    assert_eq!(GoalHorizon::Months(5).to_string(), "5 mos");
    assert_eq!(GoalHorizon::Months(12).to_string(), "1 yr");
    assert_eq!(GoalHorizon::Months(17).to_string(), "1 yr 5 mos");
    assert_eq!(GoalHorizon::Unreachable.to_string(), "Long term");
}

// ============================================================================
// Window estimation
// ============================================================================

#[test]
fn test_observed_months_is_inclusive() {
    assert_eq!(observed_months(date(2023, 1, 15), date(2023, 3, 1)), 3);
    assert_eq!(observed_months(date(2023, 1, 1), date(2023, 1, 31)), 1);
    assert_eq!(observed_months(date(2022, 11, 1), date(2023, 2, 1)), 4);
}

#[test]
fn test_average_monthly_contribution() {
    assert_eq!(average_monthly_contribution(dec!(1200), 12), dec!(100));
    assert_eq!(average_monthly_contribution(Decimal::ZERO, 12), Decimal::ZERO);
    assert_eq!(average_monthly_contribution(dec!(-100), 12), Decimal::ZERO);
    assert_eq!(average_monthly_contribution(dec!(1200), 0), Decimal::ZERO);
}

#[test]
fn test_estimate_monthly_return_compounds_down_from_annual() {
    // 1000 grew to 1100 over a year with no inflation: 10% annual,
    // 1.1^(1/12) - 1 monthly.
    let rate = estimate_monthly_return(12, dec!(1000), dec!(1100), Decimal::ZERO);
    assert!((rate - 0.007974).abs() < 0.000001);
}

#[test]
fn test_estimate_monthly_return_neutral_on_bad_input() {
    assert_eq!(
        estimate_monthly_return(0, dec!(1000), dec!(1100), Decimal::ZERO),
        0.0
    );
    assert_eq!(
        estimate_monthly_return(12, Decimal::ZERO, dec!(1100), Decimal::ZERO),
        0.0
    );
    assert_eq!(
        estimate_monthly_return(12, dec!(1000), Decimal::ZERO, Decimal::ZERO),
        0.0
    );
}

// ============================================================================
// Goal projection bundle
// ============================================================================

#[test]
fn test_project_goal_combines_wallets_in_reporting_currency() {
    let fx = FxService::new();

    let mut pln = Wallet::new("IKE", Currency::Pln);
    pln.add_snapshot(snapshot_with_deposit(2024, 1, 1, dec!(1000), dec!(1000)));
    pln.add_snapshot(snapshot_with_deposit(2024, 6, 1, dec!(1200), dec!(100)));

    let mut eur = Wallet::new("Broker", Currency::Eur);
    eur.add_snapshot(snapshot_with_deposit(2024, 3, 1, dec!(100), dec!(100)));

    let projection = project_goal(&[pln, eur], &fx, dec!(1500), dec!(0.038)).unwrap();

    // 1200 PLN + 100 EUR * 4.30
    assert_eq!(projection.current_balance, dec!(1630));
    assert_eq!(projection.target, dec!(1500));
    // Already past the target.
    assert_eq!(projection.horizon, GoalHorizon::Months(0));
}

#[test]
fn test_project_goal_skips_empty_wallets() {
    let fx = FxService::new();

    let empty = Wallet::new("Empty", Currency::Usd);
    let projection = project_goal(&[empty], &fx, dec!(1000), Decimal::ZERO).unwrap();

    assert_eq!(projection.current_balance, Decimal::ZERO);
    assert_eq!(projection.average_monthly_contribution, Decimal::ZERO);
    assert_eq!(projection.horizon, GoalHorizon::Unreachable);
}

#[test]
fn test_project_goal_derives_contribution_over_the_window() {
    let fx = FxService::new();

    let mut wallet = Wallet::new("IKE", Currency::Pln);
    wallet.add_snapshot(snapshot_with_deposit(2024, 1, 1, dec!(600), dec!(600)));
    wallet.add_snapshot(snapshot_with_deposit(2024, 6, 1, dec!(1250), dec!(600)));

    let projection = project_goal(&[wallet], &fx, dec!(100_000), dec!(0.038)).unwrap();

    // 1200 contributed over the 6-month window.
    assert_eq!(projection.average_monthly_contribution, dec!(200));
    assert!(projection.monthly_return > 0.0);
    assert!(projection.horizon.is_reachable());
}
