//! GetDashboardOverviewHandler - Query handler for the main dashboard.
//!
//! Loads tasks and metrics fresh on every call and derives task counts,
//! breakdowns, KPI rows and the pending activity list.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::dashboard::DashboardOverview;
use crate::domain::progress::HealthClassifier;
use crate::domain::tasks::DEFAULT_DUE_SOON_DAYS;
use crate::ports::{TrackerError, TrackerReader};

/// Query to get the dashboard overview.
#[derive(Debug, Clone)]
pub struct GetDashboardOverviewQuery {
    /// Date urgency is measured against.
    pub today: NaiveDate,
    /// Days before the due date a task counts as due soon.
    pub due_soon_days: i64,
}

impl GetDashboardOverviewQuery {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }
}

/// Result of successful dashboard overview query.
pub type GetDashboardOverviewResult = DashboardOverview;

/// Handler for retrieving the dashboard overview.
pub struct GetDashboardOverviewHandler {
    reader: Arc<dyn TrackerReader>,
    classifier: HealthClassifier,
}

impl GetDashboardOverviewHandler {
    pub fn new(reader: Arc<dyn TrackerReader>, classifier: HealthClassifier) -> Self {
        Self { reader, classifier }
    }

    pub fn handle(
        &self,
        query: GetDashboardOverviewQuery,
    ) -> Result<GetDashboardOverviewResult, TrackerError> {
        let tasks = self.reader.list_tasks()?;
        let metrics = self.reader.list_metrics()?;

        let overview = DashboardOverview::build(
            &tasks,
            &metrics,
            &self.classifier,
            query.today,
            query.due_soon_days,
        )?;

        tracing::debug!(
            tasks = tasks.len(),
            metrics = metrics.len(),
            pending = overview.pending_count,
            "Built dashboard overview"
        );
        Ok(overview)
    }
}
