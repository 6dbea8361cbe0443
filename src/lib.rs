//! Pulseboard - Team Productivity Tracking
//!
//! This crate computes KPI and OKR progress, classifies health, and
//! aggregates tasks for a team productivity dashboard. All derived values
//! are recomputed from freshly loaded entities on every read.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
