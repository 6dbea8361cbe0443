mod seed_data;

pub use seed_data::{SeedData, SeedError};
