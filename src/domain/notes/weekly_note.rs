//! WeeklyNote entity - a team's accomplishments, challenges and plans for one ISO week.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{NoteId, TaskId, ValidationError};
use crate::domain::tasks::Task;

/// An ISO week: weeks start on Monday, week 1 holds the year's first Thursday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekOfYear {
    pub year: i32,
    pub week: u32,
}

impl WeekOfYear {
    pub fn new(year: i32, week: u32) -> Result<Self, ValidationError> {
        // Validates against the weeks the ISO year actually has (52 or 53)
        if NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).is_none() {
            return Err(ValidationError::out_of_range("week", 1, 53, week as i32));
        }
        Ok(Self { year, week })
    }

    /// The ISO week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}, {}", self.week, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNote {
    pub id: NoteId,
    pub week: u32,
    pub year: i32,
    #[serde(default)]
    pub accomplishments: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub next_week_plan: Vec<String>,
    #[serde(default)]
    pub task_references: Vec<TaskId>,
    pub created: NaiveDate,
    pub last_updated: NaiveDate,
}

impl WeeklyNote {
    /// Creates an empty note for `week`.
    pub fn new(id: NoteId, week: WeekOfYear, today: NaiveDate) -> Self {
        Self {
            id,
            week: week.week,
            year: week.year,
            accomplishments: Vec::new(),
            challenges: Vec::new(),
            next_week_plan: Vec::new(),
            task_references: Vec::new(),
            created: today,
            last_updated: today,
        }
    }

    pub fn week_of_year(&self) -> WeekOfYear {
        WeekOfYear {
            year: self.year,
            week: self.week,
        }
    }

    pub fn is_for(&self, week: WeekOfYear) -> bool {
        self.week_of_year() == week
    }

    /// Tasks this note references, in the order of `tasks`. Unknown ids are skipped.
    pub fn referenced_tasks<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks
            .iter()
            .filter(|t| self.task_references.contains(&t.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TaskPriority;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str) -> Task {
        let today = date(2025, 4, 1);
        Task::new(TaskId::new(id).unwrap(), id, "", today, TaskPriority::Low, today).unwrap()
    }

    #[test]
    fn week_containing_uses_iso_weeks() {
        // Saturday 2025-04-05 is in ISO week 14
        assert_eq!(WeekOfYear::containing(date(2025, 4, 5)), WeekOfYear { year: 2025, week: 14 });
        // 2024-12-30 (Monday) belongs to week 1 of 2025
        assert_eq!(WeekOfYear::containing(date(2024, 12, 30)), WeekOfYear { year: 2025, week: 1 });
    }

    #[test]
    fn week_new_rejects_missing_week() {
        // 2025 has 52 ISO weeks; 2026 has 53
        assert!(WeekOfYear::new(2025, 53).is_err());
        assert!(WeekOfYear::new(2026, 53).is_ok());
        assert!(WeekOfYear::new(2025, 0).is_err());
    }

    #[test]
    fn referenced_tasks_follow_task_order_and_skip_unknown_ids() {
        let mut note = WeeklyNote::new(
            NoteId::new("note1").unwrap(),
            WeekOfYear::new(2025, 14).unwrap(),
            date(2025, 4, 5),
        );
        note.task_references = vec![
            TaskId::new("task5").unwrap(),
            TaskId::new("task1").unwrap(),
            TaskId::new("missing").unwrap(),
        ];
        let tasks = vec![task("task1"), task("task2"), task("task5")];

        let ids: Vec<_> = note.referenced_tasks(&tasks).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["task1", "task5"]);
    }

    #[test]
    fn is_for_matches_week_and_year() {
        let note = WeeklyNote::new(
            NoteId::generate(),
            WeekOfYear::new(2025, 13).unwrap(),
            date(2025, 3, 29),
        );
        assert!(note.is_for(WeekOfYear::new(2025, 13).unwrap()));
        assert!(!note.is_for(WeekOfYear::new(2024, 13).unwrap()));
    }
}
