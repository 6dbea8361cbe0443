//! Aggregator - rolls child progress values up into parent-level summaries.

use std::collections::HashMap;
use std::hash::Hash;

use super::calculator::{ProgressCalculator, FULL_PROGRESS};
use crate::domain::foundation::{InvalidMetricError, Percentage};
use crate::domain::metrics::Measurable;

/// Stateless roll-up functions. Nothing is cached; callers re-run them
/// whenever an input changes.
pub struct Aggregator;

impl Aggregator {
    /// Computes an objective's progress from its key results.
    ///
    /// Each key result's progress is computed unrounded, the values are
    /// averaged, and the mean is rounded half-up.
    ///
    /// # Edge Cases
    /// - Empty key results: Returns 0%
    pub fn objective_progress<M: Measurable>(
        key_results: &[M],
    ) -> Result<Percentage, InvalidMetricError> {
        let progresses = key_results
            .iter()
            .map(|kr| {
                ProgressCalculator::compute_progress(kr.current(), kr.target(), kr.directionality())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::mean_progress(&progresses)
    }

    /// Averages already-computed progress values and rounds half-up.
    ///
    /// Each value is clamped into `[0, 100]` before summing.
    ///
    /// # Edge Cases
    /// - Empty input: Returns 0%
    pub fn mean_progress(values: &[f64]) -> Result<Percentage, InvalidMetricError> {
        if values.is_empty() {
            return Ok(Percentage::ZERO);
        }

        let mut total = 0.0;
        for value in values {
            total += InvalidMetricError::check("progress", *value)?.clamp(0.0, FULL_PROGRESS);
        }

        Ok(Percentage::round_half_up(total / values.len() as f64))
    }

    /// Groups items by category and counts each group.
    ///
    /// Categories with no items are absent from the result; empty input
    /// yields an empty map.
    pub fn count_by<T, K, F>(items: &[T], categorizer: F) -> HashMap<K, usize>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut counts = HashMap::new();
        for item in items {
            *counts.entry(categorizer(item)).or_insert(0) += 1;
        }
        counts
    }
}
