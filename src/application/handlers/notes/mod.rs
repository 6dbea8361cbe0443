//! Weekly note handlers.

mod get_weekly_note;

pub use get_weekly_note::{
    GetWeeklyNoteHandler, GetWeeklyNoteQuery, GetWeeklyNoteResult, WeeklyNoteView,
};
