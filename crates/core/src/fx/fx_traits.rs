//! Trait defining the contract for FX conversion operations.

use rust_decimal::Decimal;

use super::currency::Currency;
use super::fx_model::RateTable;
use crate::errors::Result;

/// Contract for currency conversion against a shared rate table.
///
/// All methods are synchronous: conversions are pure arithmetic over an
/// in-memory table and never touch I/O.
pub trait FxServiceTrait: Send + Sync {
    /// The currency all cross-wallet aggregations are normalized into.
    fn reporting_currency(&self) -> Currency;

    /// Converts `amount` from one supported currency to another.
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal>;

    /// Converts `amount` into the reporting currency.
    fn convert_to_reporting(&self, amount: Decimal, from: Currency) -> Result<Decimal> {
        self.convert(amount, from, self.reporting_currency())
    }

    /// Updates a single currency rate (reporting units per 1 unit).
    fn set_rate(&self, currency: Currency, rate: Decimal) -> Result<()>;

    /// Replaces the whole rate table atomically.
    fn update_rates(&self, rates: RateTable) -> Result<()>;
}
