//! Objective entity - a goal measured by its key results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::KeyResult;
use crate::domain::foundation::{InvalidMetricError, ObjectiveId, Percentage, ValidationError};
use crate::domain::progress::Aggregator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: ObjectiveId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Authored progress; only consulted while there are no key results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_progress: Option<Percentage>,
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
}

impl Objective {
    /// Creates an objective with no key results.
    pub fn new(
        id: ObjectiveId,
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if end_date < start_date {
            return Err(ValidationError::invalid_format(
                "end_date",
                "end date precedes start date",
            ));
        }
        Ok(Self {
            id,
            title,
            description: String::new(),
            start_date,
            end_date,
            manual_progress: None,
            key_results: Vec::new(),
        })
    }

    /// Adds a key result.
    pub fn with_key_result(mut self, key_result: KeyResult) -> Self {
        self.key_results.push(key_result);
        self
    }

    /// Sets the authored progress.
    pub fn with_manual_progress(mut self, progress: Percentage) -> Self {
        self.manual_progress = Some(progress);
        self
    }

    /// Current progress.
    ///
    /// Derived from key results whenever any exist; otherwise the authored
    /// value, defaulting to zero.
    pub fn progress(&self) -> Result<Percentage, InvalidMetricError> {
        if self.key_results.is_empty() {
            return Ok(self.manual_progress.unwrap_or(Percentage::ZERO));
        }
        Aggregator::objective_progress(&self.key_results)
    }

    /// Returns true if `date` falls inside the objective's period.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
