//! Calculation Result Module
//!
//! The in-memory outcome of a single age calculation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::age;

// == Calculation Result ==
/// The outcome of converting a birth date, immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// The dog's birth date
    pub birthday: NaiveDate,
    /// Elapsed age in years (365.25-day year), never negative
    pub dog_age: f64,
    /// Human-equivalent age in years, never negative
    pub human_age: f64,
    /// Instant the calculation was performed
    pub timestamp: DateTime<Utc>,
}

impl CalculationResult {
    // == Constructor ==
    /// Computes both ages for `birthday` as of `now`.
    ///
    /// # Arguments
    /// * `birthday` - The dog's birth date
    /// * `now` - The instant of the calculation
    pub fn compute(birthday: NaiveDate, now: DateTime<Utc>) -> Self {
        let dog_age = age::dog_age_years(birthday, now);
        let human_age = age::human_equivalent_age(dog_age);

        Self {
            birthday,
            dog_age,
            human_age,
            timestamp: now,
        }
    }

    // == Is Puppy ==
    /// Returns true when the dog is under one year old.
    pub fn is_puppy(&self) -> bool {
        self.dog_age < 1.0
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_compute_fills_both_ages() {
        let now = Utc::now();
        let birthday = (now - Duration::days(730)).date_naive();

        let result = CalculationResult::compute(birthday, now);

        assert!(result.dog_age > 1.9 && result.dog_age < 2.1);
        assert!(result.human_age > 40.0 && result.human_age < 45.0);
        assert_eq!(result.timestamp, now);
    }

    #[test]
    fn test_compute_future_birthday_yields_zero_ages() {
        let now = Utc::now();
        let birthday = (now + Duration::days(30)).date_naive();

        let result = CalculationResult::compute(birthday, now);

        assert_eq!(result.dog_age, 0.0);
        assert_eq!(result.human_age, 0.0);
    }

    #[test]
    fn test_is_puppy() {
        let now = Utc::now();

        let puppy = CalculationResult::compute((now - Duration::days(100)).date_naive(), now);
        assert!(puppy.is_puppy());

        let adult = CalculationResult::compute((now - Duration::days(1000)).date_naive(), now);
        assert!(!adult.is_puppy());
    }
}
