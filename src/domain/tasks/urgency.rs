//! DueUrgency - how close a task is to its due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default window, in days, in which a task counts as due soon.
pub const DEFAULT_DUE_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DueUrgency {
    Overdue {
        #[serde(rename = "daysOverdue")]
        days_overdue: i64,
    },
    DueSoon {
        #[serde(rename = "daysLeft")]
        days_left: i64,
    },
    OnSchedule,
}

impl DueUrgency {
    /// Classifies `due` against `today`.
    ///
    /// Past due dates are overdue; due today up to `due_soon_days` ahead is
    /// due soon; anything later is on schedule.
    pub fn classify(due: NaiveDate, today: NaiveDate, due_soon_days: i64) -> Self {
        let days = (due - today).num_days();
        if days < 0 {
            DueUrgency::Overdue { days_overdue: -days }
        } else if days <= due_soon_days {
            DueUrgency::DueSoon { days_left: days }
        } else {
            DueUrgency::OnSchedule
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, DueUrgency::Overdue { .. })
    }
}
