//! Progress Calculator - normalized progress percentages from current/target values.

use crate::domain::foundation::{Directionality, InvalidMetricError};

/// Upper bound of the progress scale.
pub const FULL_PROGRESS: f64 = 100.0;

/// Stateless calculator turning raw metric values into progress percentages.
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// Computes progress in `[0, 100]`, unrounded.
    ///
    /// # Edge Cases
    /// - Higher is better, `target == 0`: 100 when `current >= 0`, else 0
    /// - Lower is better, `current == 0`: 100
    /// - Negative ratios clamp to 0, overshoot clamps to 100
    ///
    /// # Errors
    /// Returns [`InvalidMetricError`] when either input is NaN or infinite.
    pub fn compute_progress(
        current: f64,
        target: f64,
        directionality: Directionality,
    ) -> Result<f64, InvalidMetricError> {
        let raw = Self::raw_progress(current, target, directionality)?;
        Ok(raw.clamp(0.0, FULL_PROGRESS))
    }

    /// Computes the progress ratio before clamping, as a percentage.
    ///
    /// A lower-is-better metric at 30 against a target of 24 gives 80.
    /// The result is always finite: quotients that overflow saturate at
    /// `f64::MAX` with the quotient's sign.
    pub fn raw_progress(
        current: f64,
        target: f64,
        directionality: Directionality,
    ) -> Result<f64, InvalidMetricError> {
        let current = InvalidMetricError::check("current", current)?;
        let target = InvalidMetricError::check("target", target)?;

        let raw = match directionality {
            Directionality::HigherIsBetter => {
                if target == 0.0 {
                    if current >= 0.0 {
                        FULL_PROGRESS
                    } else {
                        0.0
                    }
                } else {
                    current / target * FULL_PROGRESS
                }
            }
            Directionality::LowerIsBetter => {
                if current == 0.0 {
                    FULL_PROGRESS
                } else {
                    target / current * FULL_PROGRESS
                }
            }
        };

        Ok(saturate(raw))
    }

    /// Computes progress relative to a baseline: how much of the distance
    /// from `start` to `target` has been covered.
    ///
    /// When `start == target` there is no distance to cover; the result is
    /// 100 if `current` has reached the target in the metric's direction,
    /// otherwise 0.
    pub fn compute_delta_progress(
        start: f64,
        current: f64,
        target: f64,
        directionality: Directionality,
    ) -> Result<f64, InvalidMetricError> {
        let start = InvalidMetricError::check("start", start)?;
        let current = InvalidMetricError::check("current", current)?;
        let target = InvalidMetricError::check("target", target)?;

        let span = target - start;
        if span == 0.0 {
            let reached = match directionality {
                Directionality::HigherIsBetter => current >= target,
                Directionality::LowerIsBetter => current <= target,
            };
            return Ok(if reached { FULL_PROGRESS } else { 0.0 });
        }

        let raw = saturate((current - start) / span * FULL_PROGRESS);
        Ok(raw.clamp(0.0, FULL_PROGRESS))
    }
}

fn saturate(value: f64) -> f64 {
    if value.is_infinite() {
        f64::MAX.copysign(value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HIGHER: Directionality = Directionality::HigherIsBetter;
    const LOWER: Directionality = Directionality::LowerIsBetter;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ───────────────────────────────────────────────────────────────
    // compute_progress
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn higher_is_better_is_ratio_of_target() {
        let p = ProgressCalculator::compute_progress(4.0, 10.0, HIGHER).unwrap();
        assert!(approx(p, 40.0));
    }

    #[test]
    fn higher_is_better_overshoot_clamps_to_100() {
        let p = ProgressCalculator::compute_progress(12.0, 10.0, HIGHER).unwrap();
        assert!(approx(p, 100.0));
    }

    #[test]
    fn zero_target_counts_as_met_for_non_negative_current() {
        assert_eq!(ProgressCalculator::compute_progress(5.0, 0.0, HIGHER).unwrap(), 100.0);
        assert_eq!(ProgressCalculator::compute_progress(0.0, 0.0, HIGHER).unwrap(), 100.0);
    }

    #[test]
    fn zero_target_with_negative_current_is_zero() {
        assert_eq!(ProgressCalculator::compute_progress(-1.0, 0.0, HIGHER).unwrap(), 0.0);
    }

    #[test]
    fn negative_ratio_clamps_to_zero() {
        assert_eq!(ProgressCalculator::compute_progress(-5.0, 10.0, HIGHER).unwrap(), 0.0);
    }

    #[test]
    fn lower_is_better_uses_inverse_ratio() {
        let p = ProgressCalculator::compute_progress(36.0, 24.0, LOWER).unwrap();
        assert!(approx(p, 24.0 / 36.0 * 100.0));
    }

    #[test]
    fn lower_is_better_under_target_is_full() {
        assert_eq!(ProgressCalculator::compute_progress(2.0, 4.0, LOWER).unwrap(), 100.0);
    }

    #[test]
    fn lower_is_better_zero_current_is_full() {
        assert_eq!(ProgressCalculator::compute_progress(0.0, 10.0, LOWER).unwrap(), 100.0);
    }

    #[test]
    fn nan_current_is_rejected() {
        let err = ProgressCalculator::compute_progress(f64::NAN, 10.0, HIGHER).unwrap_err();
        assert_eq!(err.field, "current");
    }

    #[test]
    fn infinite_target_is_rejected() {
        let err = ProgressCalculator::compute_progress(1.0, f64::INFINITY, LOWER).unwrap_err();
        assert_eq!(err.field, "target");
    }

    #[test]
    fn overflowing_quotient_stays_finite() {
        let raw = ProgressCalculator::raw_progress(f64::MAX, 1e-300, HIGHER).unwrap();
        assert!(raw.is_finite());
        let p = ProgressCalculator::compute_progress(f64::MAX, 1e-300, HIGHER).unwrap();
        assert_eq!(p, 100.0);
    }

    // ───────────────────────────────────────────────────────────────
    // raw_progress
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn raw_progress_is_not_clamped() {
        let raw = ProgressCalculator::raw_progress(15.0, 10.0, HIGHER).unwrap();
        assert!(approx(raw, 150.0));
        let raw = ProgressCalculator::raw_progress(30.0, 24.0, LOWER).unwrap();
        assert!(approx(raw, 80.0));
    }

    // ───────────────────────────────────────────────────────────────
    // compute_delta_progress
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn delta_progress_measures_distance_from_baseline() {
        // 150k -> 215k of a 150k -> 500k climb
        let p = ProgressCalculator::compute_delta_progress(150_000.0, 215_000.0, 500_000.0, HIGHER)
            .unwrap();
        assert!(approx(p, 65_000.0 / 350_000.0 * 100.0));
    }

    #[test]
    fn delta_progress_handles_decreasing_goals() {
        // 48h -> 36h of a 48h -> 24h reduction
        let p = ProgressCalculator::compute_delta_progress(48.0, 36.0, 24.0, LOWER).unwrap();
        assert!(approx(p, 50.0));
    }

    #[test]
    fn delta_progress_below_baseline_is_zero() {
        let p = ProgressCalculator::compute_delta_progress(7.2, 7.0, 9.0, HIGHER).unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn delta_progress_without_span_checks_target() {
        assert_eq!(
            ProgressCalculator::compute_delta_progress(5.0, 5.0, 5.0, HIGHER).unwrap(),
            100.0
        );
        assert_eq!(
            ProgressCalculator::compute_delta_progress(5.0, 6.0, 5.0, LOWER).unwrap(),
            0.0
        );
    }

    #[test]
    fn delta_progress_rejects_non_finite_start() {
        let err = ProgressCalculator::compute_delta_progress(f64::NAN, 1.0, 2.0, HIGHER)
            .unwrap_err();
        assert_eq!(err.field, "start");
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    fn finite() -> impl Strategy<Value = f64> {
        -1.0e12..1.0e12f64
    }

    fn direction() -> impl Strategy<Value = Directionality> {
        prop_oneof![Just(HIGHER), Just(LOWER)]
    }

    proptest! {
        #[test]
        fn progress_is_always_within_bounds(
            current in finite(),
            target in finite(),
            dir in direction(),
        ) {
            let p = ProgressCalculator::compute_progress(current, target, dir).unwrap();
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn higher_is_better_is_monotone_in_current(
            a in finite(),
            b in finite(),
            target in 0.001..1.0e9f64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = ProgressCalculator::compute_progress(lo, target, HIGHER).unwrap();
            let p_hi = ProgressCalculator::compute_progress(hi, target, HIGHER).unwrap();
            prop_assert!(p_lo <= p_hi);
        }

        #[test]
        fn lower_is_better_improves_as_current_falls(
            a in 0.001..1.0e9f64,
            b in 0.001..1.0e9f64,
            target in 0.001..1.0e9f64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = ProgressCalculator::compute_progress(lo, target, LOWER).unwrap();
            let p_hi = ProgressCalculator::compute_progress(hi, target, LOWER).unwrap();
            prop_assert!(p_lo >= p_hi);
        }

        #[test]
        fn progress_is_idempotent(
            current in finite(),
            target in finite(),
            dir in direction(),
        ) {
            let first = ProgressCalculator::compute_progress(current, target, dir).unwrap();
            let second = ProgressCalculator::compute_progress(current, target, dir).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }
}
