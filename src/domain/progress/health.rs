//! Health Classifier - maps progress to on-track / at-risk / off-track bands.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::calculator::{ProgressCalculator, FULL_PROGRESS};
use crate::domain::foundation::{Directionality, InvalidMetricError, ValidationError};

const BOUNDARY_EPSILON: f64 = 1e-9;

/// Coarse health classification of a metric or key result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthBand {
    OnTrack,
    AtRisk,
    OffTrack,
}

impl HealthBand {
    /// Returns true if the band calls for attention.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, HealthBand::OnTrack)
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthBand::OnTrack => "On Track",
            HealthBand::AtRisk => "At Risk",
            HealthBand::OffTrack => "Off Track",
        };
        write!(f, "{}", s)
    }
}

/// Threshold profile for the classifier.
///
/// `progress >= on_track` is on track, `at_risk <= progress < on_track` is
/// at risk, anything lower is off track. For lower-is-better metrics with a
/// known raw ratio, `lower_is_better_tolerance` is how far above target the
/// measured value may drift (0.25 = 25%) before the metric is off track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthThresholds {
    pub on_track: f64,
    pub at_risk: f64,
    pub lower_is_better_tolerance: f64,
}

impl HealthThresholds {
    /// The 90 / 75 split used by the KPI management and dashboard views.
    pub const STANDARD: Self = Self {
        on_track: 90.0,
        at_risk: 75.0,
        lower_is_better_tolerance: 0.25,
    };

    /// The 100 / 70 split used by the OKR/KPI overview.
    pub const STRICT: Self = Self {
        on_track: 100.0,
        at_risk: 70.0,
        lower_is_better_tolerance: 0.25,
    };

    /// Creates thresholds with the default tolerance.
    ///
    /// # Errors
    /// Rejects values outside `[0, 100]`, non-finite values, and an
    /// `at_risk` bound above `on_track`.
    pub fn new(on_track: f64, at_risk: f64) -> Result<Self, ValidationError> {
        Self {
            on_track,
            at_risk,
            lower_is_better_tolerance: Self::STANDARD.lower_is_better_tolerance,
        }
        .validated()
    }

    /// Returns a copy with a different lower-is-better tolerance.
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ValidationError> {
        Self {
            lower_is_better_tolerance: tolerance,
            ..self
        }
        .validated()
    }

    fn validated(self) -> Result<Self, ValidationError> {
        for (field, value) in [("on_track", self.on_track), ("at_risk", self.at_risk)] {
            if !value.is_finite() || !(0.0..=FULL_PROGRESS).contains(&value) {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("must be a number between 0 and 100, got {}", value),
                ));
            }
        }
        if self.at_risk > self.on_track {
            return Err(ValidationError::invalid_format(
                "at_risk",
                format!(
                    "at-risk threshold {} exceeds on-track threshold {}",
                    self.at_risk, self.on_track
                ),
            ));
        }
        if !self.lower_is_better_tolerance.is_finite() || self.lower_is_better_tolerance < 0.0 {
            return Err(ValidationError::invalid_format(
                "lower_is_better_tolerance",
                "must be a non-negative number",
            ));
        }
        Ok(self)
    }

    /// Lowest raw progress a lower-is-better metric may reach and still be at risk.
    ///
    /// With a 25% tolerance this is 80: `target / current >= 0.8` is the same
    /// as `current <= target * 1.25`.
    fn lower_is_better_floor(&self) -> f64 {
        FULL_PROGRESS / (1.0 + self.lower_is_better_tolerance)
    }
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Pure classifier over a fixed threshold profile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HealthClassifier {
    thresholds: HealthThresholds,
}

impl HealthClassifier {
    pub fn new(thresholds: HealthThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &HealthThresholds {
        &self.thresholds
    }

    /// Classifies a progress percentage by the configured thresholds.
    pub fn classify(
        &self,
        progress: f64,
        directionality: Directionality,
    ) -> Result<HealthBand, InvalidMetricError> {
        self.classify_with_raw(progress, directionality, None)
    }

    /// Classifies a progress percentage, optionally using the unclamped ratio.
    ///
    /// For lower-is-better metrics with a raw ratio, the band follows the
    /// measured value against target: at or under target is on track, within
    /// the tolerance above target is at risk, beyond it is off track. All other
    /// cases use the percentage thresholds.
    pub fn classify_with_raw(
        &self,
        progress: f64,
        directionality: Directionality,
        raw_progress: Option<f64>,
    ) -> Result<HealthBand, InvalidMetricError> {
        let progress = InvalidMetricError::check("progress", progress)?;
        let raw_progress = raw_progress
            .map(|raw| InvalidMetricError::check("raw_progress", raw))
            .transpose()?;

        let band = match (directionality, raw_progress) {
            (Directionality::LowerIsBetter, Some(raw)) => {
                if raw >= FULL_PROGRESS - BOUNDARY_EPSILON {
                    HealthBand::OnTrack
                } else if raw >= self.thresholds.lower_is_better_floor() - BOUNDARY_EPSILON {
                    HealthBand::AtRisk
                } else {
                    HealthBand::OffTrack
                }
            }
            _ => self.band_for(progress),
        };
        Ok(band)
    }

    /// Computes progress for a metric and classifies it with its raw ratio.
    pub fn classify_values(
        &self,
        current: f64,
        target: f64,
        directionality: Directionality,
    ) -> Result<HealthBand, InvalidMetricError> {
        let raw = ProgressCalculator::raw_progress(current, target, directionality)?;
        let progress = raw.clamp(0.0, FULL_PROGRESS);
        self.classify_with_raw(progress, directionality, Some(raw))
    }

    fn band_for(&self, progress: f64) -> HealthBand {
        if progress >= self.thresholds.on_track {
            HealthBand::OnTrack
        } else if progress >= self.thresholds.at_risk {
            HealthBand::AtRisk
        } else {
            HealthBand::OffTrack
        }
    }
}
