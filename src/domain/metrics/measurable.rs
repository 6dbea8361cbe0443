//! Measurable trait - the shared shape of KPIs and key results.

use crate::domain::foundation::Directionality;

/// Anything with a measured value, a target and a direction of improvement.
pub trait Measurable {
    /// The measured value.
    fn current(&self) -> f64;

    /// The desired value.
    fn target(&self) -> f64;

    fn directionality(&self) -> Directionality;
}
