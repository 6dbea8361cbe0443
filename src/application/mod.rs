//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers recompute every derived value on each call; the single
//! command handler writes through `TrackerWriter`.

pub mod handlers;

pub use handlers::{
    GetDashboardOverviewHandler, GetDashboardOverviewQuery, GetKanbanBoardHandler,
    GetKanbanBoardQuery, GetOkrOverviewHandler, GetOkrOverviewQuery, GetWeeklyNoteHandler,
    GetWeeklyNoteQuery, MoveTaskCommand, MoveTaskHandler, MoveTaskResult, WeeklyNoteView,
};
