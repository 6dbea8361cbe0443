//! KanbanBoard read model - tasks grouped into status columns.

use serde::Serialize;

use super::Task;
use crate::domain::foundation::TaskStatus;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanColumn {
    pub status: TaskStatus,
    pub title: String,
    pub count: usize,
    pub tasks: Vec<Task>,
}

/// Four columns in workflow order; tasks keep their input order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanBoard {
    pub columns: Vec<KanbanColumn>,
}

impl KanbanBoard {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let columns = TaskStatus::all()
            .iter()
            .map(|status| {
                let tasks: Vec<Task> = tasks
                    .iter()
                    .filter(|t| t.status == *status)
                    .cloned()
                    .collect();
                KanbanColumn {
                    status: *status,
                    title: status.to_string(),
                    count: tasks.len(),
                    tasks,
                }
            })
            .collect();
        Self { columns }
    }

    pub fn column(&self, status: TaskStatus) -> Option<&KanbanColumn> {
        self.columns.iter().find(|c| c.status == status)
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.count).sum()
    }
}
