//! Portfolio analytics - time-series aggregation, return metrics, and goal
//! projection.

pub mod performance;
pub mod projection;
pub mod timeseries;

pub use performance::*;
pub use projection::*;
pub use timeseries::*;
