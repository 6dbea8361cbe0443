mod in_memory_tracker;

pub use in_memory_tracker::InMemoryTracker;
