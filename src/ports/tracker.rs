//! Tracker ports - read and write access to metrics, objectives, tasks and
//! weekly notes.
//!
//! Ports return owned entities; every screen reloads and recomputes on each
//! read, so no caller ever holds a derived value across calls.

use crate::domain::foundation::{
    InvalidMetricError, MetricId, NoteId, ObjectiveId, TaskId, TaskPriority, TaskStatus,
};
use crate::domain::metrics::Metric;
use crate::domain::notes::{WeekOfYear, WeeklyNote};
use crate::domain::okr::Objective;
use crate::domain::tasks::Task;

/// Errors that can occur during tracker operations
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Metric not found: {0}")]
    MetricNotFound(MetricId),

    #[error("Objective not found: {0}")]
    ObjectiveNotFound(ObjectiveId),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Weekly note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    InvalidMetric(#[from] InvalidMetricError),
}

/// Whether an upsert inserted a new entity or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Read-only port for tracker queries
pub trait TrackerReader: Send + Sync {
    fn list_metrics(&self) -> Result<Vec<Metric>, TrackerError>;

    fn list_objectives(&self) -> Result<Vec<Objective>, TrackerError>;

    /// All tasks in insertion order
    fn list_tasks(&self) -> Result<Vec<Task>, TrackerError>;

    fn list_weekly_notes(&self) -> Result<Vec<WeeklyNote>, TrackerError>;

    fn get_metric(&self, id: &MetricId) -> Result<Metric, TrackerError> {
        self.list_metrics()?
            .into_iter()
            .find(|m| &m.id == id)
            .ok_or_else(|| TrackerError::MetricNotFound(id.clone()))
    }

    fn get_objective(&self, id: &ObjectiveId) -> Result<Objective, TrackerError> {
        self.list_objectives()?
            .into_iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| TrackerError::ObjectiveNotFound(id.clone()))
    }

    fn get_task(&self, id: &TaskId) -> Result<Task, TrackerError> {
        self.list_tasks()?
            .into_iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| TrackerError::TaskNotFound(id.clone()))
    }

    /// The note for `week`, if one has been written
    fn get_weekly_note(&self, week: WeekOfYear) -> Result<Option<WeeklyNote>, TrackerError> {
        Ok(self
            .list_weekly_notes()?
            .into_iter()
            .find(|n| n.is_for(week)))
    }

    fn tasks_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, TrackerError> {
        let mut tasks = self.list_tasks()?;
        tasks.retain(|t| t.status == status);
        Ok(tasks)
    }

    fn tasks_by_priority(&self, priority: TaskPriority) -> Result<Vec<Task>, TrackerError> {
        let mut tasks = self.list_tasks()?;
        tasks.retain(|t| t.priority == priority);
        Ok(tasks)
    }

    fn tasks_by_assignee(&self, assignee: &str) -> Result<Vec<Task>, TrackerError> {
        let mut tasks = self.list_tasks()?;
        tasks.retain(|t| t.assignee == assignee);
        Ok(tasks)
    }

    /// Tasks not yet done
    fn pending_tasks(&self) -> Result<Vec<Task>, TrackerError> {
        let mut tasks = self.list_tasks()?;
        tasks.retain(Task::is_pending);
        Ok(tasks)
    }
}

/// Write port for tracker mutations
///
/// Saves are upserts keyed by entity id.
pub trait TrackerWriter: Send + Sync {
    fn save_metric(&self, metric: Metric) -> Result<SaveOutcome, TrackerError>;

    fn save_objective(&self, objective: Objective) -> Result<SaveOutcome, TrackerError>;

    fn save_task(&self, task: Task) -> Result<SaveOutcome, TrackerError>;

    fn save_weekly_note(&self, note: WeeklyNote) -> Result<SaveOutcome, TrackerError>;

    /// Returns `MetricNotFound` when the id is unknown
    fn delete_metric(&self, id: &MetricId) -> Result<(), TrackerError>;

    /// Returns `NoteNotFound` when the id is unknown
    fn delete_weekly_note(&self, id: &NoteId) -> Result<(), TrackerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct FixedTasks(Vec<Task>);

    impl TrackerReader for FixedTasks {
        fn list_metrics(&self) -> Result<Vec<Metric>, TrackerError> {
            Ok(Vec::new())
        }

        fn list_objectives(&self) -> Result<Vec<Objective>, TrackerError> {
            Ok(Vec::new())
        }

        fn list_tasks(&self) -> Result<Vec<Task>, TrackerError> {
            Ok(self.0.clone())
        }

        fn list_weekly_notes(&self) -> Result<Vec<WeeklyNote>, TrackerError> {
            Ok(Vec::new())
        }
    }

    fn reader() -> FixedTasks {
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let task = |id: &str, who: &str, priority, status| {
            Task::new(TaskId::new(id).unwrap(), id, who, today, priority, today)
                .unwrap()
                .with_status(status)
        };
        FixedTasks(vec![
            task("task1", "John Doe", TaskPriority::High, TaskStatus::InProgress),
            task("task2", "Jane Smith", TaskPriority::High, TaskStatus::Todo),
            task("task3", "John Doe", TaskPriority::Medium, TaskStatus::Done),
        ])
    }

    #[test]
    fn test_reader_trait_is_object_safe() {
        let _reader: Box<dyn TrackerReader> = Box::new(reader());
    }

    #[test]
    fn test_provided_filters() {
        let reader = reader();
        assert_eq!(reader.tasks_by_status(TaskStatus::Todo).unwrap().len(), 1);
        assert_eq!(reader.tasks_by_priority(TaskPriority::High).unwrap().len(), 2);
        assert_eq!(reader.tasks_by_assignee("John Doe").unwrap().len(), 2);
        assert_eq!(reader.pending_tasks().unwrap().len(), 2);
    }

    #[test]
    fn test_get_task_not_found() {
        let missing = TaskId::new("nope").unwrap();
        match reader().get_task(&missing) {
            Err(TrackerError::TaskNotFound(id)) => assert_eq!(id, missing),
            other => panic!("Expected TaskNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_weekly_note_is_none() {
        let week = WeekOfYear::new(2025, 14).unwrap();
        assert!(reader().get_weekly_note(week).unwrap().is_none());
    }

    #[test]
    fn test_error_messages() {
        let error = TrackerError::MetricNotFound(MetricId::new("kpi9").unwrap());
        assert_eq!(error.to_string(), "Metric not found: kpi9");

        let error: TrackerError = InvalidMetricError {
            field: "target",
            value: f64::NAN,
        }
        .into();
        assert!(error.to_string().contains("target"));
    }
}
