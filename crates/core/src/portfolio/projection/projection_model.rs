//! Goal projection domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How far away a savings target is, in whole months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalHorizon {
    /// Reachable within the projection ceiling; zero means already achieved.
    Months(u32),
    /// Not reachable within the projection ceiling.
    Unreachable,
}

impl GoalHorizon {
    pub fn is_reachable(&self) -> bool {
        matches!(self, GoalHorizon::Months(_))
    }
}

impl fmt::Display for GoalHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalHorizon::Unreachable => f.write_str("Long term"),
            GoalHorizon::Months(0) => f.write_str("0 mos"),
            GoalHorizon::Months(months) => {
                let years = months / 12;
                let rem = months % 12;
                if years > 0 && rem > 0 {
                    write!(f, "{} yr {} mos", years, rem)
                } else if years > 0 {
                    write!(f, "{} yr", years)
                } else {
                    write!(f, "{} mos", rem)
                }
            }
        }
    }
}

/// Everything the goal estimator derives for one target, in the reporting
/// currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProjection {
    pub target: Decimal,
    pub current_balance: Decimal,
    pub average_monthly_contribution: Decimal,
    /// Estimated monthly growth rate, net of inflation.
    pub monthly_return: f64,
    pub horizon: GoalHorizon,
}
