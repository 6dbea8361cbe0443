//! KeyResult entity - a measurable result owned by one objective.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Directionality, InvalidMetricError, KeyResultId};
use crate::domain::metrics::Measurable;
use crate::domain::progress::{HealthBand, HealthClassifier, ProgressCalculator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    pub id: KeyResultId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target: f64,
    pub current: f64,
    #[serde(default)]
    pub unit: String,
    /// Baseline at the start of the period, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_value: Option<f64>,
    #[serde(default)]
    pub directionality: Directionality,
}

impl KeyResult {
    /// Creates a higher-is-better key result without a baseline.
    pub fn new(
        id: KeyResultId,
        title: impl Into<String>,
        current: f64,
        target: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            target,
            current,
            unit: unit.into(),
            start_value: None,
            directionality: Directionality::default(),
        }
    }

    /// Sets the baseline.
    pub fn with_start_value(mut self, start_value: f64) -> Self {
        self.start_value = Some(start_value);
        self
    }

    /// Sets the directionality.
    pub fn with_directionality(mut self, directionality: Directionality) -> Self {
        self.directionality = directionality;
        self
    }

    /// Unrounded progress toward target. This is the value objectives average.
    pub fn progress(&self) -> Result<f64, InvalidMetricError> {
        ProgressCalculator::compute_progress(self.current, self.target, self.directionality)
    }

    /// Progress measured from the baseline when one exists, otherwise
    /// the same as [`KeyResult::progress`].
    pub fn baseline_progress(&self) -> Result<f64, InvalidMetricError> {
        match self.start_value {
            Some(start) => ProgressCalculator::compute_delta_progress(
                start,
                self.current,
                self.target,
                self.directionality,
            ),
            None => self.progress(),
        }
    }

    pub fn health(&self, classifier: &HealthClassifier) -> Result<HealthBand, InvalidMetricError> {
        classifier.classify_values(self.current, self.target, self.directionality)
    }
}

impl Measurable for KeyResult {
    fn current(&self) -> f64 {
        self.current
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

    fn kr(current: f64, target: f64) -> KeyResult {
        KeyResult::new(KeyResultId::new("kr").unwrap(), "Result", current, target, "units")
    }

    #[test]
    fn progress_ignores_start_value() {
        let result = kr(215_000.0, 500_000.0).with_start_value(150_000.0);
        assert!((result.progress().unwrap() - 43.0).abs() < 1e-9);
    }

    #[test]
    fn baseline_progress_uses_start_value() {
        let result = kr(7.6, 9.0).with_start_value(7.2);
        let expected = 0.4 / 1.8 * 100.0;
        assert!((result.baseline_progress().unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn baseline_progress_falls_back_without_start_value() {
        let result = kr(3.0, 12.0);
        assert_eq!(result.baseline_progress().unwrap(), result.progress().unwrap());
    }

    #[test]
    fn zero_target_key_result_is_complete() {
        assert_eq!(kr(0.0, 0.0).progress().unwrap(), 100.0);
    }
}
