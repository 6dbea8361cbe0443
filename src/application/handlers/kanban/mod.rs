//! Kanban board handlers.

mod get_board;
mod move_task;

pub use get_board::{GetKanbanBoardHandler, GetKanbanBoardQuery, GetKanbanBoardResult};
pub use move_task::{MoveTaskCommand, MoveTaskHandler, MoveTaskResult};
