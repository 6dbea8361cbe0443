//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the tracker domain.

mod directionality;
mod errors;
mod ids;
mod percentage;
mod task_priority;
mod task_status;

pub use directionality::Directionality;
pub use errors::{InvalidMetricError, ValidationError};
pub use ids::{KeyResultId, MetricId, NoteId, ObjectiveId, TaskId};
pub use percentage::Percentage;
pub use task_priority::TaskPriority;
pub use task_status::TaskStatus;
