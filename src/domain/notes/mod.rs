//! Notes module - weekly team notes.

mod weekly_note;

pub use weekly_note::{WeekOfYear, WeeklyNote};
