//! Progress Module - the calculation layer shared by every screen.
//!
//! All functions are pure and stateless: they take already-loaded entities
//! and return freshly computed values. Callers recompute on every read.
//!
//! # Components
//!
//! - `ProgressCalculator` - progress percentage from current/target values
//! - `HealthClassifier` - progress to OnTrack / AtRisk / OffTrack
//! - `Aggregator` - objective roll-ups and category counts
//!
//! Dependency order: calculator, then classifier, then aggregator.

mod aggregator;
mod calculator;
mod health;

pub use aggregator::Aggregator;
pub use calculator::{ProgressCalculator, FULL_PROGRESS};
pub use health::{HealthBand, HealthClassifier, HealthThresholds};
