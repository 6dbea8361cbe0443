//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the storage behind it. Adapters implement these ports.
//!
//! - `TrackerReader` - Queries over metrics, objectives, tasks and notes
//! - `TrackerWriter` - Upserts and deletes

mod tracker;

pub use tracker::{SaveOutcome, TrackerError, TrackerReader, TrackerWriter};
