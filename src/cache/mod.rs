// Cache module for the local snapshot file.
// Stores the GitHub profile and repository list between runs.

pub mod manager;
pub mod snapshot;
pub mod store;

pub use manager::CacheManager;
pub use snapshot::{FRESHNESS_WINDOW, Snapshot};
