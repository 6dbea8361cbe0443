//! GetWeeklyNoteHandler - Query handler for one week's note and the tasks
//! it references.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::notes::{WeekOfYear, WeeklyNote};
use crate::domain::tasks::Task;
use crate::ports::{TrackerError, TrackerReader};

#[derive(Debug, Clone, Copy)]
pub struct GetWeeklyNoteQuery {
    pub week: WeekOfYear,
}

/// A note with its task references resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyNoteView {
    pub note: WeeklyNote,
    pub tasks: Vec<Task>,
}

/// `None` when nothing has been written for the week.
pub type GetWeeklyNoteResult = Option<WeeklyNoteView>;

pub struct GetWeeklyNoteHandler {
    reader: Arc<dyn TrackerReader>,
}

impl GetWeeklyNoteHandler {
    pub fn new(reader: Arc<dyn TrackerReader>) -> Self {
        Self { reader }
    }

    pub fn handle(&self, query: GetWeeklyNoteQuery) -> Result<GetWeeklyNoteResult, TrackerError> {
        let Some(note) = self.reader.get_weekly_note(query.week)? else {
            tracing::debug!(week = %query.week, "No weekly note");
            return Ok(None);
        };

        let all_tasks = self.reader.list_tasks()?;
        let tasks: Vec<Task> = note.referenced_tasks(&all_tasks).into_iter().cloned().collect();

        if tasks.len() < note.task_references.len() {
            tracing::warn!(
                note_id = %note.id,
                referenced = note.task_references.len(),
                resolved = tasks.len(),
                "Weekly note references unknown tasks"
            );
        }

        Ok(Some(WeeklyNoteView { note, tasks }))
    }
}
