//! Goal projection - how long until the combined wallets reach a target.

mod projection_model;
mod projection_service;

pub use projection_model::{GoalHorizon, GoalProjection};
pub use projection_service::*;

#[cfg(test)]
mod projection_service_tests;
