//! Dashboard read models.
//!
//! Views assembled from freshly loaded entities on every read. Nothing here
//! is cached or persisted.

pub mod okr_overview;
pub mod overview;
mod severity;

pub use okr_overview::{KeyResultRow, ObjectiveSummary, OkrOverview};
pub use overview::{DashboardOverview, KpiRow, PendingActivity};
pub use severity::Severity;
