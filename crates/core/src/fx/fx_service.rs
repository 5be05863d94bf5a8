//! Currency conversion service over a shared rate table.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::{Arc, RwLock};

use super::currency::Currency;
use super::fx_errors::FxError;
use super::fx_model::{default_rate_table, RateTable};
use super::fx_traits::FxServiceTrait;
use crate::errors::Result;

/// Converts monetary amounts between supported currencies by routing through
/// a single reporting currency.
///
/// The rate table is shared mutable state with many concurrent readers and
/// rare writers. Readers clone an `Arc` snapshot of the table and never hold
/// the lock across arithmetic; writers build a full replacement table and
/// swap it in, so a reader can never observe a partially-updated table.
pub struct FxService {
    reporting: Currency,
    scale: u32,
    rounding: RoundingStrategy,
    rates: RwLock<Arc<RateTable>>,
}

impl FxService {
    /// Default scale for converted amounts.
    pub const DEFAULT_SCALE: u32 = 4;

    /// Creates a converter with the seed rate table: PLN reporting,
    /// four fractional digits, round half-up.
    pub fn new() -> Self {
        Self {
            reporting: Currency::Pln,
            scale: Self::DEFAULT_SCALE,
            rounding: RoundingStrategy::MidpointAwayFromZero,
            rates: RwLock::new(Arc::new(default_rate_table())),
        }
    }

    /// Creates a converter with an explicit reporting currency, rate table,
    /// and rounding configuration.
    ///
    /// Every rate must be positive. The reporting currency's entry is pinned
    /// to 1 regardless of the supplied table.
    pub fn with_rates(
        reporting: Currency,
        rates: RateTable,
        scale: u32,
        rounding: RoundingStrategy,
    ) -> Result<Self> {
        let table = Self::validated(reporting, rates)?;
        Ok(Self {
            reporting,
            scale,
            rounding,
            rates: RwLock::new(Arc::new(table)),
        })
    }

    /// Converts `amount` with a caller-specified scale and rounding mode
    /// instead of the configured defaults.
    pub fn convert_with(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
        scale: u32,
        rounding: RoundingStrategy,
    ) -> Result<Decimal> {
        if from == to {
            return Ok(amount);
        }

        let table = self.table();
        let rate_from = *table.get(&from).ok_or(FxError::MissingRate(from))?;
        let rate_to = *table.get(&to).ok_or(FxError::MissingRate(to))?;

        // Route through the reporting currency: amount -> reporting -> target.
        let amount_in_reporting = amount * rate_from;
        Ok((amount_in_reporting / rate_to).round_dp_with_strategy(scale, rounding))
    }

    /// Returns the current rate table snapshot.
    pub fn rates(&self) -> Arc<RateTable> {
        self.table()
    }

    fn table(&self) -> Arc<RateTable> {
        self.rates.read().unwrap().clone()
    }

    fn validated(reporting: Currency, mut rates: RateTable) -> Result<RateTable> {
        if rates.is_empty() {
            return Err(
                FxError::InvalidArgument("rate table must not be empty".to_string()).into(),
            );
        }
        for (currency, rate) in &rates {
            if *rate <= Decimal::ZERO {
                return Err(FxError::InvalidArgument(format!(
                    "rate for {} must be positive, got {}",
                    currency, rate
                ))
                .into());
            }
        }
        rates.insert(reporting, Decimal::ONE);
        Ok(rates)
    }
}

impl Default for FxService {
    fn default() -> Self {
        Self::new()
    }
}

impl FxServiceTrait for FxService {
    fn reporting_currency(&self) -> Currency {
        self.reporting
    }

    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
        self.convert_with(amount, from, to, self.scale, self.rounding)
    }

    fn set_rate(&self, currency: Currency, rate: Decimal) -> Result<()> {
        if rate <= Decimal::ZERO {
            return Err(FxError::InvalidArgument(format!(
                "rate for {} must be positive, got {}",
                currency, rate
            ))
            .into());
        }
        if currency == self.reporting && rate != Decimal::ONE {
            return Err(FxError::InvalidArgument(format!(
                "rate for reporting currency {} is fixed at 1",
                currency
            ))
            .into());
        }

        let mut guard = self.rates.write().unwrap();
        let mut table = (**guard).clone();
        table.insert(currency, rate);
        *guard = Arc::new(table);

        debug!("Updated {} rate to {}", currency, rate);
        Ok(())
    }

    fn update_rates(&self, rates: RateTable) -> Result<()> {
        let table = Self::validated(self.reporting, rates)?;

        let mut guard = self.rates.write().unwrap();
        *guard = Arc::new(table);

        debug!("Replaced rate table ({} currencies)", guard.len());
        Ok(())
    }
}
