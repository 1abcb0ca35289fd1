//! Persisted record DTOs
//!
//! Defines the JSON layout of the stored history and last-result blobs.
//! Ages are stored as fixed one-decimal-place strings.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::result::CalculationResult;

// == Formatting ==
/// Formats an age in years as a fixed one-decimal-place string.
pub fn format_years(years: f64) -> String {
    format!("{years:.1}")
}

// == History Entry ==
/// One persisted history record, as stored in the `dogAgeHistory` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation instant in Unix milliseconds, doubles as a unique id
    pub id: i64,
    /// Creation instant, RFC 3339 with millisecond precision
    pub timestamp: String,
    /// Birth date as an ISO `YYYY-MM-DD` string
    pub birthday: String,
    /// Dog age in years, one decimal place
    #[serde(rename = "dogAge")]
    pub dog_age: String,
    /// Human-equivalent age in years, one decimal place
    #[serde(rename = "humanAge")]
    pub human_age: String,
}

impl From<&CalculationResult> for HistoryEntry {
    fn from(result: &CalculationResult) -> Self {
        Self {
            id: result.timestamp.timestamp_millis(),
            timestamp: result
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            birthday: result.birthday.to_string(),
            dog_age: format_years(result.dog_age),
            human_age: format_years(result.human_age),
        }
    }
}

// == Last Result ==
/// The single-slot last calculation, as stored in the `dogAgeLastResult` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastResult {
    /// Birth date as an ISO `YYYY-MM-DD` string
    pub birthday: String,
    /// Dog age in years, one decimal place
    #[serde(rename = "dogAge")]
    pub dog_age: String,
    /// Human-equivalent age in years, one decimal place
    #[serde(rename = "humanAge")]
    pub human_age: String,
}

impl From<&CalculationResult> for LastResult {
    fn from(result: &CalculationResult) -> Self {
        Self {
            birthday: result.birthday.to_string(),
            dog_age: format_years(result.dog_age),
            human_age: format_years(result.human_age),
        }
    }
}
