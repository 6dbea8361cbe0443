//! In-Memory Tracker Adapter
//!
//! Holds metrics, objectives, tasks and weekly notes in memory, in insertion
//! order. Backs the binary and the tests.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::adapters::seed::SeedData;
use crate::domain::foundation::{MetricId, NoteId};
use crate::domain::metrics::Metric;
use crate::domain::notes::WeeklyNote;
use crate::domain::okr::Objective;
use crate::domain::tasks::Task;
use crate::ports::{SaveOutcome, TrackerError, TrackerReader, TrackerWriter};

/// In-memory storage for all tracker entities
#[derive(Debug, Clone, Default)]
pub struct InMemoryTracker {
    metrics: Arc<RwLock<Vec<Metric>>>,
    objectives: Arc<RwLock<Vec<Objective>>>,
    tasks: Arc<RwLock<Vec<Task>>>,
    notes: Arc<RwLock<Vec<WeeklyNote>>>,
}

impl InMemoryTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker holding the given seed data
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            metrics: Arc::new(RwLock::new(seed.metrics)),
            objectives: Arc::new(RwLock::new(seed.objectives)),
            tasks: Arc::new(RwLock::new(seed.tasks)),
            notes: Arc::new(RwLock::new(seed.weekly_notes)),
        }
    }

    /// Copy of everything currently stored
    pub fn snapshot(&self) -> Result<SeedData, TrackerError> {
        Ok(SeedData {
            metrics: read(&self.metrics)?.clone(),
            objectives: read(&self.objectives)?.clone(),
            tasks: read(&self.tasks)?.clone(),
            weekly_notes: read(&self.notes)?.clone(),
        })
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, TrackerError> {
    lock.read()
        .map_err(|e| TrackerError::Storage(format!("lock poisoned: {}", e)))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, TrackerError> {
    lock.write()
        .map_err(|e| TrackerError::Storage(format!("lock poisoned: {}", e)))
}

/// Replaces the entry matching `same` or appends `item`.
fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T) -> bool) -> SaveOutcome {
    match items.iter_mut().find(|existing| same(existing)) {
        Some(existing) => {
            *existing = item;
            SaveOutcome::Updated
        }
        None => {
            items.push(item);
            SaveOutcome::Created
        }
    }
}

impl TrackerReader for InMemoryTracker {
    fn list_metrics(&self) -> Result<Vec<Metric>, TrackerError> {
        Ok(read(&self.metrics)?.clone())
    }

    fn list_objectives(&self) -> Result<Vec<Objective>, TrackerError> {
        Ok(read(&self.objectives)?.clone())
    }

    fn list_tasks(&self) -> Result<Vec<Task>, TrackerError> {
        Ok(read(&self.tasks)?.clone())
    }

    fn list_weekly_notes(&self) -> Result<Vec<WeeklyNote>, TrackerError> {
        Ok(read(&self.notes)?.clone())
    }
}

impl TrackerWriter for InMemoryTracker {
    fn save_metric(&self, metric: Metric) -> Result<SaveOutcome, TrackerError> {
        let id = metric.id.clone();
        let outcome = upsert(&mut *write(&self.metrics)?, metric, |m| m.id == id);
        tracing::debug!(metric_id = %id, ?outcome, "Saved metric");
        Ok(outcome)
    }

    fn save_objective(&self, objective: Objective) -> Result<SaveOutcome, TrackerError> {
        let id = objective.id.clone();
        let outcome = upsert(&mut *write(&self.objectives)?, objective, |o| o.id == id);
        tracing::debug!(objective_id = %id, ?outcome, "Saved objective");
        Ok(outcome)
    }

    fn save_task(&self, task: Task) -> Result<SaveOutcome, TrackerError> {
        let id = task.id.clone();
        let outcome = upsert(&mut *write(&self.tasks)?, task, |t| t.id == id);
        tracing::debug!(task_id = %id, ?outcome, "Saved task");
        Ok(outcome)
    }

    fn save_weekly_note(&self, note: WeeklyNote) -> Result<SaveOutcome, TrackerError> {
        let id = note.id.clone();
        let outcome = upsert(&mut *write(&self.notes)?, note, |n| n.id == id);
        tracing::debug!(note_id = %id, ?outcome, "Saved weekly note");
        Ok(outcome)
    }

    fn delete_metric(&self, id: &MetricId) -> Result<(), TrackerError> {
        let mut metrics = write(&self.metrics)?;
        let before = metrics.len();
        metrics.retain(|m| &m.id != id);
        if metrics.len() == before {
            return Err(TrackerError::MetricNotFound(id.clone()));
        }
        tracing::debug!(metric_id = %id, "Deleted metric");
        Ok(())
    }

    fn delete_weekly_note(&self, id: &NoteId) -> Result<(), TrackerError> {
        let mut notes = write(&self.notes)?;
        let before = notes.len();
        notes.retain(|n| &n.id != id);
        if notes.len() == before {
            return Err(TrackerError::NoteNotFound(id.clone()));
        }
        tracing::debug!(note_id = %id, "Deleted weekly note");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{TaskId, TaskPriority, TaskStatus};
    use crate::domain::notes::WeekOfYear;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn seeded() -> InMemoryTracker {
        InMemoryTracker::from_seed(SeedData::builtin().unwrap())
    }

    #[test]
    fn test_seeded_tracker_lists_everything() {
        let tracker = seeded();
        assert_eq!(tracker.list_tasks().unwrap().len(), 8);
        assert_eq!(tracker.list_objectives().unwrap().len(), 3);
        assert_eq!(tracker.list_metrics().unwrap().len(), 6);
        assert_eq!(tracker.list_weekly_notes().unwrap().len(), 2);
    }

    #[test]
    fn test_seeded_queries_match_mock_data() {
        let tracker = seeded();
        assert_eq!(tracker.pending_tasks().unwrap().len(), 7);
        assert_eq!(tracker.tasks_by_priority(TaskPriority::High).unwrap().len(), 4);
        assert_eq!(tracker.tasks_by_status(TaskStatus::InProgress).unwrap().len(), 3);
        assert_eq!(tracker.tasks_by_assignee("Bob Johnson").unwrap().len(), 2);
    }

    #[test]
    fn test_save_task_creates_then_updates() {
        let tracker = InMemoryTracker::new();
        let task = Task::new(
            TaskId::new("t1").unwrap(),
            "Write docs",
            "Emily Davis",
            date(5, 1),
            TaskPriority::Low,
            date(4, 1),
        )
        .unwrap();

        assert_eq!(tracker.save_task(task.clone()).unwrap(), SaveOutcome::Created);
        assert_eq!(
            tracker.save_task(task.with_status(TaskStatus::Done)).unwrap(),
            SaveOutcome::Updated
        );

        let tasks = tracker.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Done);
    }

    #[test]
    fn test_update_keeps_insertion_order() {
        let tracker = seeded();
        let mut task = tracker.get_task(&TaskId::new("task3").unwrap()).unwrap();
        task.move_to(TaskStatus::Review, date(4, 12));
        tracker.save_task(task).unwrap();

        let ids: Vec<String> = tracker
            .list_tasks()
            .unwrap()
            .into_iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(ids[2], "task3");
    }

    #[test]
    fn test_delete_metric() {
        let tracker = seeded();
        let id = MetricId::new("kpi6").unwrap();
        tracker.delete_metric(&id).unwrap();
        assert_eq!(tracker.list_metrics().unwrap().len(), 5);

        match tracker.delete_metric(&id) {
            Err(TrackerError::MetricNotFound(missing)) => assert_eq!(missing, id),
            other => panic!("Expected MetricNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_weekly_note() {
        let tracker = seeded();
        tracker.delete_weekly_note(&NoteId::new("note1").unwrap()).unwrap();
        let week = WeekOfYear::new(2025, 14).unwrap();
        assert!(tracker.get_weekly_note(week).unwrap().is_none());

        let result = tracker.delete_weekly_note(&NoteId::new("note1").unwrap());
        assert!(matches!(result, Err(TrackerError::NoteNotFound(_))));
    }

    #[test]
    fn test_clones_share_storage() {
        let tracker = InMemoryTracker::new();
        let other = tracker.clone();
        let note = WeeklyNote::new(
            NoteId::new("n").unwrap(),
            WeekOfYear::new(2025, 16).unwrap(),
            date(4, 14),
        );
        other.save_weekly_note(note).unwrap();
        assert_eq!(tracker.list_weekly_notes().unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_returns_current_state() {
        let tracker = seeded();
        tracker.delete_metric(&MetricId::new("kpi1").unwrap()).unwrap();
        let snapshot = tracker.snapshot().unwrap();
        assert_eq!(snapshot.metrics.len(), 5);
        assert_eq!(snapshot.tasks.len(), 8);
    }
}
