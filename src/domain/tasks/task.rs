//! Task entity - a card on the Kanban board.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DueUrgency;
use crate::domain::foundation::{TaskId, TaskPriority, TaskStatus, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assignee: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub created: NaiveDate,
    pub last_updated: NaiveDate,
}

impl Task {
    /// Creates a new to-do task created and updated on `today`.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        assignee: impl Into<String>,
        due_date: NaiveDate,
        priority: TaskPriority,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id,
            title,
            description: String::new(),
            assignee: assignee.into(),
            due_date,
            priority,
            status: TaskStatus::Todo,
            notes: Vec::new(),
            tags: Vec::new(),
            created: today,
            last_updated: today,
        })
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns true until the task is done.
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Moves the task to another column, stamping `last_updated` when it changes.
    ///
    /// Returns false when the task was already in `status`.
    pub fn move_to(&mut self, status: TaskStatus, today: NaiveDate) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.last_updated = today;
        true
    }

    /// How pressing the due date is relative to `today`.
    pub fn urgency(&self, today: NaiveDate, due_soon_days: i64) -> DueUrgency {
        DueUrgency::classify(self.due_date, today, due_soon_days)
    }
}
