//! Dog Age Calculator - converts a dog's birth date into a human-equivalent age
//!
//! Provides the age-conversion formulas and a bounded, persistent history of
//! past calculations backed by local key-value storage.

pub mod age;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod storage;

pub use config::Config;
pub use error::{DogAgeError, Result};
pub use history::HistoryStore;
pub use models::CalculationResult;
pub use storage::LocalStore;
