//! Domain layer containing the tracker's entities and calculations.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, percentages, enums, errors)
//! - `progress` - Progress calculation, health classification, aggregation
//! - `metrics` - KPI metrics and their trends
//! - `okr` - Objectives and key results
//! - `tasks` - Tasks, urgency, the kanban board and breakdowns
//! - `notes` - Weekly notes
//! - `dashboard` - Read models assembled for display

pub mod dashboard;
pub mod foundation;
pub mod metrics;
pub mod notes;
pub mod okr;
pub mod progress;
pub mod tasks;
