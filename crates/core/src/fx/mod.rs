//! FX (Foreign Exchange) module - currency vocabulary, rate table, and
//! conversion service.

mod currency;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;

pub use currency::Currency;
pub use fx_errors::FxError;
pub use fx_model::{default_rate_table, RateTable};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
