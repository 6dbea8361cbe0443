//! Data source configuration

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::tasks::DEFAULT_DUE_SOON_DAYS;

/// Where tracker data comes from and the date it is evaluated against
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// YAML seed file; the built-in seed is used when unset
    pub seed_path: Option<PathBuf>,

    /// Days before the due date a task counts as due soon
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: i64,

    /// Fixed "today", for reproducible output
    pub reference_date: Option<NaiveDate>,
}

impl DataConfig {
    /// The configured reference date, or the local date
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.due_soon_days < 0 {
            return Err(ValidationError::NegativeDueSoonWindow(self.due_soon_days));
        }
        if let Some(path) = &self.seed_path {
            if !path.is_file() {
                return Err(ValidationError::SeedFileMissing(path.display().to_string()));
            }
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            due_soon_days: default_due_soon_days(),
            reference_date: None,
        }
    }
}

fn default_due_soon_days() -> i64 {
    DEFAULT_DUE_SOON_DAYS
}
