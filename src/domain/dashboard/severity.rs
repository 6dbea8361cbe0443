//! Severity - the presentation hint attached to health bands, priorities,
//! statuses and due dates. Colors and icons are chosen by the UI.

use serde::Serialize;

use crate::domain::foundation::{TaskPriority, TaskStatus};
use crate::domain::progress::HealthBand;
use crate::domain::tasks::DueUrgency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
    Info,
}

impl From<HealthBand> for Severity {
    fn from(band: HealthBand) -> Self {
        match band {
            HealthBand::OnTrack => Severity::Success,
            HealthBand::AtRisk => Severity::Warning,
            HealthBand::OffTrack => Severity::Danger,
        }
    }
}

impl From<TaskPriority> for Severity {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::High => Severity::Danger,
            TaskPriority::Medium => Severity::Warning,
            TaskPriority::Low => Severity::Success,
        }
    }
}

impl From<TaskStatus> for Severity {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => Severity::Danger,
            TaskStatus::InProgress => Severity::Warning,
            TaskStatus::Review => Severity::Info,
            TaskStatus::Done => Severity::Success,
        }
    }
}

impl From<DueUrgency> for Severity {
    fn from(urgency: DueUrgency) -> Self {
        match urgency {
            DueUrgency::Overdue { .. } => Severity::Danger,
            DueUrgency::DueSoon { .. } => Severity::Warning,
            DueUrgency::OnSchedule => Severity::Success,
        }
    }
}
