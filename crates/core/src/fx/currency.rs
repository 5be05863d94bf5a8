//! Supported currency vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fx_errors::FxError;

/// A currency the engine can convert between.
///
/// The set is closed: rates are quoted against the reporting currency, and a
/// code outside this set has no conversion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Pln,
    Eur,
    Usd,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 3] = [Currency::Pln, Currency::Eur, Currency::Usd];

    /// Resolves a currency code to a supported currency.
    ///
    /// Codes are trimmed and matched case-insensitively. Blank or unknown
    /// input fails with [`FxError::UnsupportedCurrency`].
    pub fn from_code(code: &str) -> Result<Self, FxError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(FxError::UnsupportedCurrency(code.to_string()));
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "PLN" => Ok(Currency::Pln),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            _ => Err(FxError::UnsupportedCurrency(code.to_string())),
        }
    }

    /// ISO 4217 code for this currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Pln => "PLN",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s)
    }
}
