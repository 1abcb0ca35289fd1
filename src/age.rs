//! Age Conversion Module
//!
//! Pure functions converting a birth date into an elapsed-time dog age and
//! a human-equivalent age via the logarithmic formula from Wang et al.
//! (Cell Systems): `HumanAge = 16 * ln(DogAge) + 31`.

use chrono::{DateTime, NaiveDate, Utc};

// == Conversion Constants ==
/// Length of a year in days, accounting for leap years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Lower clamp applied to the log input, in years (~18 days)
pub const MIN_LOG_AGE_YEARS: f64 = 0.05;

/// Multiplier of the log term in the human-age formula
pub const LOG_COEFFICIENT: f64 = 16.0;

/// Constant offset of the human-age formula
pub const LOG_OFFSET: f64 = 31.0;

const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400.0;

// == Dog Age ==
/// Returns the dog's age in years as of `now`.
///
/// The birth date is taken as midnight UTC, and elapsed time is divided by
/// a 365.25-day year. Future birth dates yield 0, never a negative age.
///
/// # Arguments
/// * `birthday` - The dog's birth date
/// * `now` - The instant to measure the age at
pub fn dog_age_years(birthday: NaiveDate, now: DateTime<Utc>) -> f64 {
    let birth = birthday
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time of day")
        .and_utc();

    let elapsed_secs = now.signed_duration_since(birth).num_milliseconds() as f64 / 1000.0;
    (elapsed_secs / SECONDS_PER_YEAR).max(0.0)
}

// == Human-Equivalent Age ==
/// Converts a dog age in years into a human-equivalent age.
///
/// Returns 0 for ages at or below 0. Ages between 0 and 0.05 years are
/// clamped to 0.05 before the log term so the logarithm cannot diverge
/// near zero, and the final result is floored at 0. No upper bound is
/// imposed.
///
/// # Arguments
/// * `dog_age` - The dog's age in years
pub fn human_equivalent_age(dog_age: f64) -> f64 {
    if dog_age <= 0.0 {
        return 0.0;
    }

    // Clamp very small ages to ~18 days before taking the logarithm
    let safe_age = dog_age.max(MIN_LOG_AGE_YEARS);
    (LOG_COEFFICIENT * safe_age.ln() + LOG_OFFSET).max(0.0)
}
