//! Seed data - the entity sets an in-memory tracker starts from.
//!
//! Stored as YAML. The built-in seed is embedded at compile time; an
//! alternative file can be loaded from disk or a snapshot written back.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::metrics::Metric;
use crate::domain::notes::WeeklyNote;
use crate::domain::okr::Objective;
use crate::domain::tasks::Task;

const BUILTIN_SEED: &str = include_str!("../../../data/seed.yaml");

static BUILTIN: Lazy<Result<SeedData, SeedError>> = Lazy::new(|| SeedData::from_yaml(BUILTIN_SEED));

/// Errors that can occur while loading or writing seed data
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Failed to parse seed data: {0}")]
    Parse(String),

    #[error("Failed to serialize seed data: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub weekly_notes: Vec<WeeklyNote>,
}

impl SeedData {
    /// The data set shipped with the crate.
    pub fn builtin() -> Result<Self, SeedError> {
        BUILTIN.clone()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        serde_yaml::from_str(yaml).map_err(|e| SeedError::Parse(e.to_string()))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let data = Self::from_yaml(&yaml)?;

        tracing::debug!(
            path = %path.display(),
            metrics = data.metrics.len(),
            objectives = data.objectives.len(),
            tasks = data.tasks.len(),
            notes = data.weekly_notes.len(),
            "Loaded seed data"
        );
        Ok(data)
    }

    /// Writes the data as YAML, creating parent directories as needed.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SeedError> {
        let path = path.as_ref();
        let io_error = |e: std::io::Error| SeedError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| SeedError::Serialize(e.to_string()))?;
        std::fs::write(path, yaml).map_err(io_error)
    }
}
