//! Health classification configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::progress::{HealthClassifier, HealthThresholds};

/// Named threshold profile
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HealthProfile {
    /// 90 / 75
    #[default]
    Standard,
    /// 100 / 70
    Strict,
}

impl HealthProfile {
    fn thresholds(self) -> HealthThresholds {
        match self {
            HealthProfile::Standard => HealthThresholds::STANDARD,
            HealthProfile::Strict => HealthThresholds::STRICT,
        }
    }
}

/// Health classifier configuration
///
/// `on_track` and `at_risk` override the profile's bounds when set.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    #[serde(default)]
    pub profile: HealthProfile,

    pub on_track: Option<f64>,

    pub at_risk: Option<f64>,

    /// Fraction above target a lower-is-better metric may sit and still be at risk
    #[serde(default = "default_tolerance")]
    pub lower_is_better_tolerance: f64,
}

impl HealthConfig {
    /// Resolve the effective thresholds
    pub fn thresholds(&self) -> Result<HealthThresholds, ValidationError> {
        let base = self.profile.thresholds();
        HealthThresholds::new(
            self.on_track.unwrap_or(base.on_track),
            self.at_risk.unwrap_or(base.at_risk),
        )
        .and_then(|t| t.with_tolerance(self.lower_is_better_tolerance))
        .map_err(|e| ValidationError::InvalidThresholds(e.to_string()))
    }

    pub fn classifier(&self) -> Result<HealthClassifier, ValidationError> {
        Ok(HealthClassifier::new(self.thresholds()?))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds().map(|_| ())
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            profile: HealthProfile::default(),
            on_track: None,
            at_risk: None,
            lower_is_better_tolerance: default_tolerance(),
        }
    }
}

fn default_tolerance() -> f64 {
    0.25
}
