//! Data models for the dog age calculator
//!
//! This module defines the in-memory calculation result and the DTOs
//! (Data Transfer Objects) used for the persisted JSON blobs.

pub mod records;
pub mod result;

// Re-export commonly used types
pub use records::{format_years, HistoryEntry, LastResult};
pub use result::CalculationResult;
