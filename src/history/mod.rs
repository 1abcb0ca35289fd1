//! History Module
//!
//! Provides the bounded, newest-first log of past calculations and the
//! single-slot last-result cache, persisted to local key-value storage.

mod store;


// Re-export public types
pub use store::HistoryStore;

// == Public Constants ==
/// Maximum number of entries kept in the history
pub const MAX_HISTORY_ITEMS: usize = 10;

/// Storage key for the history blob
pub const HISTORY_KEY: &str = "dogAgeHistory";

/// Storage key for the last-result blob
pub const LAST_RESULT_KEY: &str = "dogAgeLastResult";
