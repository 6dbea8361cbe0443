//! Metric (KPI) entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Measurable, MetricTrend};
use crate::domain::foundation::{Directionality, InvalidMetricError, MetricId, ValidationError};
use crate::domain::progress::{HealthBand, HealthClassifier, ProgressCalculator};

/// How often a KPI is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportingFrequency {
    Daily,
    #[default]
    Weekly,
    Sprint,
    Monthly,
    Quarterly,
}

impl fmt::Display for ReportingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportingFrequency::Daily => "Daily",
            ReportingFrequency::Weekly => "Weekly",
            ReportingFrequency::Sprint => "Sprint",
            ReportingFrequency::Monthly => "Monthly",
            ReportingFrequency::Quarterly => "Quarterly",
        };
        write!(f, "{}", s)
    }
}

/// A key performance indicator tracked against a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: MetricId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub target: f64,
    pub actual: f64,
    /// Display label only.
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub directionality: Directionality,
    #[serde(default)]
    pub frequency: ReportingFrequency,
    /// Historical values, oldest first.
    #[serde(default)]
    pub trend: Vec<f64>,
    pub last_updated: NaiveDate,
}

impl Metric {
    /// Creates a higher-is-better metric with no history.
    pub fn new(
        id: MetricId,
        name: impl Into<String>,
        target: f64,
        actual: f64,
        unit: impl Into<String>,
        last_updated: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            description: String::new(),
            category: String::new(),
            target,
            actual,
            unit: unit.into(),
            directionality: Directionality::default(),
            frequency: ReportingFrequency::default(),
            trend: Vec::new(),
            last_updated,
        })
    }

    /// Sets the directionality.
    pub fn with_directionality(mut self, directionality: Directionality) -> Self {
        self.directionality = directionality;
        self
    }

    /// Sets the historical series.
    pub fn with_trend(mut self, trend: Vec<f64>) -> Self {
        self.trend = trend;
        self
    }

    /// Unrounded progress toward target, in `[0, 100]`.
    pub fn progress(&self) -> Result<f64, InvalidMetricError> {
        ProgressCalculator::compute_progress(self.actual, self.target, self.directionality)
    }

    /// Health band, using the raw ratio so lower-is-better tolerance applies.
    pub fn health(&self, classifier: &HealthClassifier) -> Result<HealthBand, InvalidMetricError> {
        classifier.classify_values(self.actual, self.target, self.directionality)
    }

    /// Returns true once the target is met in the metric's direction.
    pub fn is_target_met(&self) -> bool {
        match self.directionality {
            Directionality::HigherIsBetter => self.actual >= self.target,
            Directionality::LowerIsBetter => self.actual <= self.target,
        }
    }

    /// Summarizes the historical series.
    pub fn trend_summary(&self) -> Result<MetricTrend, InvalidMetricError> {
        MetricTrend::from_series(&self.trend, self.directionality)
    }
}

impl Measurable for Metric {
    fn current(&self) -> f64 {
        self.actual
    }

    fn target(&self) -> f64 {
        self.target
    }

    fn directionality(&self) -> Directionality {
        self.directionality
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progress::HealthThresholds;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    fn review_time() -> Metric {
        Metric::new(MetricId::new("kpi3").unwrap(), "Code Review Time", 24.0, 36.0, "hours", date())
            .unwrap()
            .with_directionality(Directionality::LowerIsBetter)
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = Metric::new(MetricId::new("k").unwrap(), " ", 1.0, 1.0, "", date());
        assert_eq!(result, Err(ValidationError::empty_field("name")));
    }

    #[test]
    fn progress_uses_actual_against_target() {
        let metric =
            Metric::new(MetricId::new("kpi4").unwrap(), "New Users", 500.0, 430.0, "users", date())
                .unwrap();
        assert!((metric.progress().unwrap() - 86.0).abs() < 1e-9);
    }

    #[test]
    fn lower_is_better_metric_far_over_target_is_off_track() {
        let classifier = HealthClassifier::new(HealthThresholds::STANDARD);
        assert_eq!(review_time().health(&classifier).unwrap(), HealthBand::OffTrack);
        assert!(!review_time().is_target_met());
    }

    #[test]
    fn deserializes_with_defaults() {
        let yaml = r#"
id: kpi1
name: Revenue Growth
target: 10
actual: 8.5
lastUpdated: 2025-04-05
"#;
        let metric: Metric = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(metric.directionality, Directionality::HigherIsBetter);
        assert_eq!(metric.frequency, ReportingFrequency::Weekly);
        assert!(metric.trend.is_empty());
    }
}
