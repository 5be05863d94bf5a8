//! Core error types for the analytics engine.
//!
//! Currency conversion fails loudly with typed errors; the metric and
//! projection calculators never error, they degrade to neutral values
//! instead (see the per-module documentation).

use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),
}
