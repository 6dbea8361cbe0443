//! Metric Model - KPIs and the shared `Measurable` shape.

mod measurable;
mod metric;
mod summary;
mod trend;

pub use measurable::Measurable;
pub use metric::{Metric, ReportingFrequency};
pub use summary::KpiSummary;
pub use trend::{MetricTrend, TrendDirection};
