//! Unit tests for wallet domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::fx::Currency;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn snapshot(y: i32, m: u32, d: u32, value: Decimal) -> WalletSnapshot {
    WalletSnapshot::new(date(y, m, d), value)
}

fn snapshot_with_flows(
    y: i32,
    m: u32,
    d: u32,
    value: Decimal,
    deposit: Decimal,
    withdrawal: Decimal,
) -> WalletSnapshot {
    let mut s = snapshot(y, m, d, value);
    s.monthly_deposit = deposit;
    s.monthly_withdrawal = withdrawal;
    s
}

#[test]
fn test_empty_wallet_derives_zeroes() {
    let wallet = Wallet::new("Empty", Currency::Pln);

    assert_eq!(wallet.current_value(), Decimal::ZERO);
    assert_eq!(wallet.total_deposits(), Decimal::ZERO);
    assert_eq!(wallet.total_withdrawals(), Decimal::ZERO);
    assert_eq!(wallet.total_earnings(), Decimal::ZERO);
    assert_eq!(wallet.return_rate(), Decimal::ZERO);
    assert_eq!(wallet.first_snapshot_date(), None);
    assert_eq!(wallet.last_snapshot_date(), None);
}

#[test]
fn test_current_value_follows_date_not_insertion_order() {
    let mut wallet = Wallet::new("IKE", Currency::Pln);
    wallet.add_snapshot(snapshot(2024, 3, 1, dec!(300)));
    wallet.add_snapshot(snapshot(2024, 1, 1, dec!(100)));
    wallet.add_snapshot(snapshot(2024, 2, 1, dec!(200)));

    assert_eq!(wallet.current_value(), dec!(300));
    assert_eq!(wallet.first_snapshot_date(), Some(date(2024, 1, 1)));
    assert_eq!(wallet.last_snapshot_date(), Some(date(2024, 3, 1)));
}

#[test]
fn test_sorted_snapshots_orders_by_date() {
    let mut wallet = Wallet::new("IKE", Currency::Pln);
    wallet.add_snapshot(snapshot(2024, 3, 1, dec!(300)));
    wallet.add_snapshot(snapshot(2024, 1, 1, dec!(100)));

    let sorted = wallet.sorted_snapshots();
    assert_eq!(sorted[0].snapshot_date, date(2024, 1, 1));
    assert_eq!(sorted[1].snapshot_date, date(2024, 3, 1));
}

#[test]
fn test_totals_sum_all_snapshots() {
    let mut wallet = Wallet::new("Broker", Currency::Usd);
    wallet.add_snapshot(snapshot_with_flows(
        2024,
        1,
        1,
        dec!(1000),
        dec!(500),
        dec!(100),
    ));
    wallet.add_snapshot(snapshot_with_flows(
        2024,
        2,
        1,
        dec!(1600),
        dec!(200),
        dec!(50),
    ));

    assert_eq!(wallet.total_deposits(), dec!(700));
    assert_eq!(wallet.total_withdrawals(), dec!(150));
    assert_eq!(wallet.net_contributions(), dec!(550));
}

#[test]
fn test_net_cash_flow() {
    let s = snapshot_with_flows(2024, 1, 1, dec!(1000), dec!(300), dec!(120));
    assert_eq!(s.net_cash_flow(), dec!(180));
}

#[test]
fn test_return_rate_in_percent() {
    let mut wallet = Wallet::new("Broker", Currency::Pln);
    wallet.add_snapshot(snapshot_with_flows(
        2024,
        1,
        1,
        dec!(1100),
        dec!(1000),
        Decimal::ZERO,
    ));

    // (1100 - 1000) / 1000 = 10%
    assert_eq!(wallet.return_rate(), dec!(10));
}

#[test]
fn test_return_rate_zero_without_positive_contributions() {
    let mut wallet = Wallet::new("Broker", Currency::Pln);
    wallet.add_snapshot(snapshot_with_flows(
        2024,
        1,
        1,
        dec!(1100),
        dec!(100),
        dec!(400),
    ));

    assert_eq!(wallet.return_rate(), Decimal::ZERO);
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let s = snapshot(2024, 1, 31, dec!(1000));
    let json = serde_json::to_value(&s).unwrap();

    assert!(json.get("snapshotDate").is_some());
    assert!(json.get("portfolioValue").is_some());
    assert!(json.get("monthlyDeposit").is_some());
}
