//! TaskBreakdown - dashboard counts by status and priority.

use serde::Serialize;

use super::Task;
use crate::domain::foundation::{TaskPriority, TaskStatus};
use crate::domain::progress::Aggregator;

/// One slice of a breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount<K> {
    pub category: K,
    pub label: String,
    pub count: usize,
}

/// Full breakdown, every category present (zero counts included) in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBreakdown {
    pub by_status: Vec<CategoryCount<TaskStatus>>,
    pub by_priority: Vec<CategoryCount<TaskPriority>>,
}

impl TaskBreakdown {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let statuses = Aggregator::count_by(tasks, |t| t.status);
        let priorities = Aggregator::count_by(tasks, |t| t.priority);

        Self {
            by_status: TaskStatus::all()
                .iter()
                .map(|s| CategoryCount {
                    category: *s,
                    label: s.to_string(),
                    count: statuses.get(s).copied().unwrap_or(0),
                })
                .collect(),
            by_priority: TaskPriority::all()
                .iter()
                .map(|p| CategoryCount {
                    category: *p,
                    label: p.to_string(),
                    count: priorities.get(p).copied().unwrap_or(0),
                })
                .collect(),
        }
    }

    pub fn status_count(&self, status: TaskStatus) -> usize {
        self.by_status
            .iter()
            .find(|c| c.category == status)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn priority_count(&self, priority: TaskPriority) -> usize {
        self.by_priority
            .iter()
            .find(|c| c.category == priority)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TaskId;
    use chrono::NaiveDate;

    fn task(id: &str, status: TaskStatus, priority: TaskPriority) -> Task {
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        Task::new(TaskId::new(id).unwrap(), id, "", today, priority, today)
            .unwrap()
            .with_status(status)
    }

    #[test]
    fn breakdown_includes_zero_categories() {
        let tasks = vec![
            task("1", TaskStatus::Todo, TaskPriority::High),
            task("2", TaskStatus::Todo, TaskPriority::Low),
            task("3", TaskStatus::Done, TaskPriority::High),
        ];
        let breakdown = TaskBreakdown::from_tasks(&tasks);

        assert_eq!(breakdown.by_status.len(), 4);
        assert_eq!(breakdown.status_count(TaskStatus::Todo), 2);
        assert_eq!(breakdown.status_count(TaskStatus::Done), 1);
        assert_eq!(breakdown.status_count(TaskStatus::Review), 0);
        assert_eq!(breakdown.priority_count(TaskPriority::High), 2);
        assert_eq!(breakdown.priority_count(TaskPriority::Medium), 0);
    }

    #[test]
    fn breakdown_keeps_chart_order() {
        let breakdown = TaskBreakdown::from_tasks(&[]);
        let labels: Vec<_> = breakdown.by_priority.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["High", "Medium", "Low"]);
    }
}
