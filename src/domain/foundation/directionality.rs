//! Directionality of a metric: whether rising or falling values mean improvement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way a metric moves when it improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Directionality {
    /// Reaching or exceeding the target is success (revenue, new users).
    #[default]
    HigherIsBetter,
    /// Staying at or below the target is success (review time, bug age).
    LowerIsBetter,
}

impl Directionality {
    /// Returns true when larger values are improvements.
    pub fn is_higher_better(&self) -> bool {
        matches!(self, Directionality::HigherIsBetter)
    }

    /// Returns true if moving from `from` to `to` is an improvement.
    pub fn improved(&self, from: f64, to: f64) -> bool {
        match self {
            Directionality::HigherIsBetter => to > from,
            Directionality::LowerIsBetter => to < from,
        }
    }
}

impl fmt::Display for Directionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Directionality::HigherIsBetter => "Higher is better",
            Directionality::LowerIsBetter => "Lower is better",
        };
        write!(f, "{}", s)
    }
}
