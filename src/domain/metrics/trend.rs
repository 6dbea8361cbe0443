//! MetricTrend value object - movement of a KPI across its history.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Directionality, InvalidMetricError};

/// Whether the latest reading moved the metric toward or away from its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Flat,
}

/// Summary of the last two points of a trend series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrend {
    pub latest: Option<f64>,
    pub previous: Option<f64>,
    pub change: f64,
    pub direction: TrendDirection,
}

impl MetricTrend {
    /// Builds the summary from a series ordered oldest first.
    ///
    /// # Edge Cases
    /// - Fewer than two points: `Flat` with zero change
    pub fn from_series(
        series: &[f64],
        directionality: Directionality,
    ) -> Result<Self, InvalidMetricError> {
        for value in series {
            InvalidMetricError::check("trend", *value)?;
        }

        let latest = series.last().copied();
        let previous = series.len().checked_sub(2).map(|i| series[i]);

        let (change, direction) = match (previous, latest) {
            (Some(prev), Some(last)) => {
                let direction = if last == prev {
                    TrendDirection::Flat
                } else if directionality.improved(prev, last) {
                    TrendDirection::Improving
                } else {
                    TrendDirection::Declining
                };
                (last - prev, direction)
            }
            _ => (0.0, TrendDirection::Flat),
        };

        Ok(Self {
            latest,
            previous,
            change,
            direction,
        })
    }
}
