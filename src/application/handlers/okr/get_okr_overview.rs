//! GetOkrOverviewHandler - Query handler for the OKR and KPI screen.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::dashboard::OkrOverview;
use crate::domain::progress::HealthClassifier;
use crate::ports::{TrackerError, TrackerReader};

/// Query to get the OKR overview.
#[derive(Debug, Clone)]
pub struct GetOkrOverviewQuery {
    /// Date used to flag which objectives are active.
    pub today: NaiveDate,
}

pub type GetOkrOverviewResult = OkrOverview;

pub struct GetOkrOverviewHandler {
    reader: Arc<dyn TrackerReader>,
    classifier: HealthClassifier,
}

impl GetOkrOverviewHandler {
    pub fn new(reader: Arc<dyn TrackerReader>, classifier: HealthClassifier) -> Self {
        Self { reader, classifier }
    }

    pub fn handle(&self, query: GetOkrOverviewQuery) -> Result<GetOkrOverviewResult, TrackerError> {
        let objectives = self.reader.list_objectives()?;
        let metrics = self.reader.list_metrics()?;

        let overview = OkrOverview::build(&objectives, &metrics, &self.classifier, query.today)?;

        tracing::debug!(
            objectives = objectives.len(),
            kpis = metrics.len(),
            off_track = overview.kpi_summary.off_track,
            "Built OKR overview"
        );
        Ok(overview)
    }
}
