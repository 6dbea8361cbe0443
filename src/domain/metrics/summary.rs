//! KpiSummary - how many KPIs sit in each health band.

use serde::Serialize;

use super::Metric;
use crate::domain::foundation::InvalidMetricError;
use crate::domain::progress::{Aggregator, HealthBand, HealthClassifier};

/// Counts of KPIs per health band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub on_track: usize,
    pub at_risk: usize,
    pub off_track: usize,
}

impl KpiSummary {
    pub fn from_metrics(
        metrics: &[Metric],
        classifier: &HealthClassifier,
    ) -> Result<Self, InvalidMetricError> {
        let bands = metrics
            .iter()
            .map(|m| m.health(classifier))
            .collect::<Result<Vec<_>, _>>()?;
        let counts = Aggregator::count_by(&bands, |b| *b);
        let count = |band| counts.get(&band).copied().unwrap_or(0);

        Ok(Self {
            on_track: count(HealthBand::OnTrack),
            at_risk: count(HealthBand::AtRisk),
            off_track: count(HealthBand::OffTrack),
        })
    }

    pub fn total(&self) -> usize {
        self.on_track + self.at_risk + self.off_track
    }
}
