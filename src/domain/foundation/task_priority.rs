//! TaskPriority enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a task.
///
/// Ordering puts `High` first so sorted lists show urgent work on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    /// All priorities, highest first.
    pub fn all() -> &'static [TaskPriority] {
        &[TaskPriority::High, TaskPriority::Medium, TaskPriority::Low]
    }

    /// Stable key used in serialized maps and seed files.
    pub fn key(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskPriority::High => "High",
            TaskPriority::Medium => "Medium",
            TaskPriority::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_sorts_first() {
        let mut priorities = vec![TaskPriority::Low, TaskPriority::High, TaskPriority::Medium];
        priorities.sort();
        assert_eq!(priorities, TaskPriority::all());
    }

    #[test]
    fn deserializes_lowercase() {
        let p: TaskPriority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(p, TaskPriority::High);
    }
}
