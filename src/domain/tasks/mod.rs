//! Tasks module - Kanban tasks, due-date urgency, and task roll-ups.

mod board;
mod breakdown;
mod task;
mod urgency;

pub use board::{KanbanBoard, KanbanColumn};
pub use breakdown::{CategoryCount, TaskBreakdown};
pub use task::Task;
pub use urgency::{DueUrgency, DEFAULT_DUE_SOON_DAYS};
