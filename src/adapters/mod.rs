//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory tracker store
//! - `seed` - YAML seed data loading and snapshots

pub mod memory;
pub mod seed;

pub use memory::InMemoryTracker;
pub use seed::{SeedData, SeedError};
