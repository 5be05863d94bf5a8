//! FX error types.

use thiserror::Error;

use super::currency::Currency;

/// Errors raised by currency conversion and rate management.
///
/// Conversion fails loudly: a silent wrong conversion is worse than a
/// visible failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No exchange rate configured for {0}")]
    MissingRate(Currency),

    #[error("Unsupported currency: '{0}'")]
    UnsupportedCurrency(String),
}
