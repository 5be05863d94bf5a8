//! Multi-wallet time-series aggregation.

mod timeseries_model;
mod timeseries_service;

pub use timeseries_model::PortfolioPoint;
pub use timeseries_service::build_aggregated_time_series;
