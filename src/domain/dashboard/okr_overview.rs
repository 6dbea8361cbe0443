//! OKR screen read model - objectives with derived progress plus the KPI
//! table and its band counts.

use chrono::NaiveDate;
use serde::Serialize;

use super::{KpiRow, Severity};
use crate::domain::foundation::{
    Directionality, InvalidMetricError, KeyResultId, ObjectiveId, Percentage,
};
use crate::domain::metrics::{KpiSummary, Metric};
use crate::domain::okr::{KeyResult, Objective};
use crate::domain::progress::{HealthBand, HealthClassifier};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OkrOverview {
    pub objectives: Vec<ObjectiveSummary>,
    pub kpis: Vec<KpiRow>,
    pub kpi_summary: KpiSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveSummary {
    pub id: ObjectiveId,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
    pub progress: Percentage,
    pub health: HealthBand,
    pub severity: Severity,
    pub key_results: Vec<KeyResultRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResultRow {
    pub id: KeyResultId,
    pub title: String,
    pub current: f64,
    pub target: f64,
    pub unit: String,
    pub directionality: Directionality,
    pub progress: f64,
    pub display_progress: Percentage,
    /// Progress from the recorded baseline, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_progress: Option<f64>,
    pub health: HealthBand,
    pub severity: Severity,
}

impl KeyResultRow {
    fn from_key_result(
        kr: &KeyResult,
        classifier: &HealthClassifier,
    ) -> Result<Self, InvalidMetricError> {
        let progress = kr.progress()?;
        let health = kr.health(classifier)?;
        let baseline_progress = match kr.start_value {
            Some(_) => Some(kr.baseline_progress()?),
            None => None,
        };

        Ok(Self {
            id: kr.id.clone(),
            title: kr.title.clone(),
            current: kr.current,
            target: kr.target,
            unit: kr.unit.clone(),
            directionality: kr.directionality,
            progress,
            display_progress: Percentage::round_half_up(progress),
            baseline_progress,
            health,
            severity: health.into(),
        })
    }
}

impl ObjectiveSummary {
    pub fn from_objective(
        objective: &Objective,
        classifier: &HealthClassifier,
        today: NaiveDate,
    ) -> Result<Self, InvalidMetricError> {
        let progress = objective.progress()?;
        // Objective progress is already a percentage of completion
        let health = classifier.classify(
            f64::from(progress.value()),
            Directionality::HigherIsBetter,
        )?;
        let key_results = objective
            .key_results
            .iter()
            .map(|kr| KeyResultRow::from_key_result(kr, classifier))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: objective.id.clone(),
            title: objective.title.clone(),
            description: objective.description.clone(),
            start_date: objective.start_date,
            end_date: objective.end_date,
            active: objective.is_active_on(today),
            progress,
            health,
            severity: health.into(),
            key_results,
        })
    }
}

impl OkrOverview {
    pub fn build(
        objectives: &[Objective],
        metrics: &[Metric],
        classifier: &HealthClassifier,
        today: NaiveDate,
    ) -> Result<Self, InvalidMetricError> {
        let objectives = objectives
            .iter()
            .map(|o| ObjectiveSummary::from_objective(o, classifier, today))
            .collect::<Result<Vec<_>, _>>()?;
        let kpis = metrics
            .iter()
            .map(|m| KpiRow::from_metric(m, classifier))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            objectives,
            kpis,
            kpi_summary: KpiSummary::from_metrics(metrics, classifier)?,
        })
    }
}
