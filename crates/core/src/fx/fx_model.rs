//! FX rate table model.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::currency::Currency;

/// Rate table: reporting-currency units per one unit of each currency.
/// The reporting currency's own entry is pinned to 1.
pub type RateTable = HashMap<Currency, Decimal>;

/// Seed rate table quoted against PLN.
pub fn default_rate_table() -> RateTable {
    HashMap::from([
        (Currency::Pln, Decimal::ONE),
        (Currency::Eur, dec!(4.30)),
        (Currency::Usd, dec!(3.70)),
    ])
}
