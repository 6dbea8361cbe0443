//! MoveTaskHandler - Command handler for dragging a card to another column.
//!
//! Reads the task, applies the new status and saves it back. Moving a task
//! onto the column it already sits in succeeds without writing.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::{TaskId, TaskStatus};
use crate::domain::tasks::Task;
use crate::ports::{TrackerError, TrackerReader, TrackerWriter};

/// Command to move a task to a status column.
#[derive(Debug, Clone)]
pub struct MoveTaskCommand {
    pub task_id: TaskId,
    pub status: TaskStatus,
    /// Stamped as the task's last update when the status changes.
    pub today: NaiveDate,
}

/// Result of a move.
#[derive(Debug, Clone)]
pub struct MoveTaskResult {
    pub task: Task,
    /// The status the task had before the command.
    pub previous_status: TaskStatus,
    /// False when the task was already in the requested column.
    pub moved: bool,
}

pub struct MoveTaskHandler {
    reader: Arc<dyn TrackerReader>,
    writer: Arc<dyn TrackerWriter>,
}

impl MoveTaskHandler {
    pub fn new(reader: Arc<dyn TrackerReader>, writer: Arc<dyn TrackerWriter>) -> Self {
        Self { reader, writer }
    }

    pub fn handle(&self, cmd: MoveTaskCommand) -> Result<MoveTaskResult, TrackerError> {
        // 1. Load the current task
        let mut task = self.reader.get_task(&cmd.task_id)?;
        let previous_status = task.status;

        // 2. Apply the move
        let moved = task.move_to(cmd.status, cmd.today);

        // 3. Persist only when something changed
        if moved {
            self.writer.save_task(task.clone())?;
            tracing::info!(
                task_id = %cmd.task_id,
                from = %previous_status,
                to = %cmd.status,
                "Moved task"
            );
        }

        Ok(MoveTaskResult {
            task,
            previous_status,
            moved,
        })
    }
}
