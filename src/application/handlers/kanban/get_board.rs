//! GetKanbanBoardHandler - Query handler for the kanban board.

use std::sync::Arc;

use crate::domain::tasks::KanbanBoard;
use crate::ports::{TrackerError, TrackerReader};

/// Query to get the board. Optionally narrowed to one assignee.
#[derive(Debug, Clone, Default)]
pub struct GetKanbanBoardQuery {
    pub assignee: Option<String>,
}

pub type GetKanbanBoardResult = KanbanBoard;

pub struct GetKanbanBoardHandler {
    reader: Arc<dyn TrackerReader>,
}

impl GetKanbanBoardHandler {
    pub fn new(reader: Arc<dyn TrackerReader>) -> Self {
        Self { reader }
    }

    pub fn handle(&self, query: GetKanbanBoardQuery) -> Result<GetKanbanBoardResult, TrackerError> {
        let tasks = match &query.assignee {
            Some(assignee) => self.reader.tasks_by_assignee(assignee)?,
            None => self.reader.list_tasks()?,
        };
        let board = KanbanBoard::from_tasks(&tasks);

        tracing::debug!(tasks = board.total(), assignee = ?query.assignee, "Built kanban board");
        Ok(board)
    }
}
