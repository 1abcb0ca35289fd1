//! Error types for the dog age calculator
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Dog Age Error Enum ==
/// Unified error type for the dog age calculator.
#[derive(Error, Debug)]
pub enum DogAgeError {
    /// Birth date input could not be parsed as a calendar date
    #[error("Invalid birth date: {0}")]
    InvalidDate(String),

    /// Storage read/write failure
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted blob could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the dog age calculator.
pub type Result<T> = std::result::Result<T, DogAgeError>;
