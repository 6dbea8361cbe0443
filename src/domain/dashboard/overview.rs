use chrono::NaiveDate;
use serde::Serialize;

use super::Severity;
use crate::domain::foundation::{
    InvalidMetricError, MetricId, Percentage, TaskId, TaskPriority, TaskStatus,
};
use crate::domain::metrics::{Metric, TrendDirection};
use crate::domain::progress::{HealthBand, HealthClassifier};
use crate::domain::tasks::{DueUrgency, Task, TaskBreakdown};

/// The main dashboard - task counts, KPI progress and pending work
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Date the urgency columns were computed against
    pub reference_date: NaiveDate,

    /// Headline cards
    pub pending_count: usize,
    pub high_priority_pending: usize,
    pub in_progress_count: usize,

    /// Chart data
    pub breakdown: TaskBreakdown,

    pub kpis: Vec<KpiRow>,

    /// Pending tasks, earliest due first
    pub pending_activities: Vec<PendingActivity>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiRow {
    pub id: MetricId,
    pub name: String,
    pub category: String,
    pub actual: f64,
    pub target: f64,
    pub unit: String,
    /// Unrounded progress for the bar width
    pub progress: f64,
    /// Rounded label value
    pub display_progress: Percentage,
    pub health: HealthBand,
    pub severity: Severity,
    /// Highlighted on the dashboard when not on track
    pub needs_attention: bool,
    pub trend: TrendDirection,
    pub last_updated: NaiveDate,
}

impl KpiRow {
    pub fn from_metric(
        metric: &Metric,
        classifier: &HealthClassifier,
    ) -> Result<Self, InvalidMetricError> {
        let progress = metric.progress()?;
        let health = metric.health(classifier)?;
        let trend = metric.trend_summary()?;

        Ok(Self {
            id: metric.id.clone(),
            name: metric.name.clone(),
            category: metric.category.clone(),
            actual: metric.actual,
            target: metric.target,
            unit: metric.unit.clone(),
            progress,
            display_progress: Percentage::round_half_up(progress),
            health,
            severity: health.into(),
            needs_attention: health.needs_attention(),
            trend: trend.direction,
            last_updated: metric.last_updated,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingActivity {
    pub id: TaskId,
    pub title: String,
    pub assignee: String,
    pub priority: TaskPriority,
    pub priority_severity: Severity,
    pub status: TaskStatus,
    pub status_severity: Severity,
    pub due_date: NaiveDate,
    pub urgency: DueUrgency,
    pub urgency_severity: Severity,
}

impl PendingActivity {
    fn from_task(task: &Task, today: NaiveDate, due_soon_days: i64) -> Self {
        let urgency = task.urgency(today, due_soon_days);
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            assignee: task.assignee.clone(),
            priority: task.priority,
            priority_severity: task.priority.into(),
            status: task.status,
            status_severity: task.status.into(),
            due_date: task.due_date,
            urgency,
            urgency_severity: urgency.into(),
        }
    }
}

impl DashboardOverview {
    /// Builds the dashboard from freshly loaded entities.
    pub fn build(
        tasks: &[Task],
        metrics: &[Metric],
        classifier: &HealthClassifier,
        today: NaiveDate,
        due_soon_days: i64,
    ) -> Result<Self, InvalidMetricError> {
        let pending: Vec<&Task> = tasks.iter().filter(|t| t.is_pending()).collect();

        let kpis = metrics
            .iter()
            .map(|m| KpiRow::from_metric(m, classifier))
            .collect::<Result<Vec<_>, _>>()?;

        let mut pending_activities: Vec<PendingActivity> = pending
            .iter()
            .map(|t| PendingActivity::from_task(t, today, due_soon_days))
            .collect();
        // Stable sort keeps input order for equal due dates
        pending_activities.sort_by_key(|a| a.due_date);

        Ok(Self {
            reference_date: today,
            pending_count: pending.len(),
            high_priority_pending: pending
                .iter()
                .filter(|t| t.priority == TaskPriority::High)
                .count(),
            in_progress_count: pending
                .iter()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            breakdown: TaskBreakdown::from_tasks(tasks),
            kpis,
            pending_activities,
        })
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
