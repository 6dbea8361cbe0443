//! TaskStatus enum: the Kanban column a task sits in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Done,
        ]
    }

    /// Returns true if the task still needs work.
    pub fn is_pending(&self) -> bool {
        !matches!(self, TaskStatus::Done)
    }

    /// Stable key used in serialized maps and seed files.
    pub fn key(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[test]
    fn all_is_in_column_order() {
        assert_eq!(
            TaskStatus::all(),
            &[TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Review, TaskStatus::Done]
        );
    }

    #[test]
    fn only_done_is_not_pending() {
        assert!(TaskStatus::Todo.is_pending());
        assert!(TaskStatus::InProgress.is_pending());
        assert!(TaskStatus::Review.is_pending());
        assert!(!TaskStatus::Done.is_pending());
    }

    #[test]
    fn serde_uses_board_keys() {
        for status in TaskStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.key()));
        }
    }

    #[test]
    fn displays_column_titles() {
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    }
}
