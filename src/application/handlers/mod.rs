//! Application handlers.
//!
//! Query and command handlers that load entities through the tracker ports
//! and hand them to the domain's pure calculations.

pub mod dashboard;
pub mod kanban;
pub mod notes;
pub mod okr;

pub use dashboard::{
    GetDashboardOverviewHandler, GetDashboardOverviewQuery, GetDashboardOverviewResult,
};
pub use kanban::{
    GetKanbanBoardHandler, GetKanbanBoardQuery, GetKanbanBoardResult, MoveTaskCommand,
    MoveTaskHandler, MoveTaskResult,
};
pub use notes::{GetWeeklyNoteHandler, GetWeeklyNoteQuery, GetWeeklyNoteResult, WeeklyNoteView};
pub use okr::{GetOkrOverviewHandler, GetOkrOverviewQuery, GetOkrOverviewResult};
