//! Calendar date/time to Julian Day conversion.
//!
//! The birth place's local clock time is consumed as-is; no timezone shift
//! is applied.

use crate::error::ChartError;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000: f64 = 2_451_545.0;

/// Julian Day at midnight starting 0001-01-01 (proleptic Gregorian), minus one day.
const CE_MIDNIGHT_OFFSET: f64 = 1_721_424.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Clock time used when the caller has no precise birth time.
pub const DEFAULT_BIRTH_TIME: &str = "12:00";

/// Parse a `YYYY-MM-DD` Gregorian date.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| ChartError::InvalidDate {
        input: input.to_string(),
    })
}

/// Parse a 24-hour `HH:MM` clock time.
pub fn parse_birth_time(input: &str) -> Result<NaiveTime, ChartError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| ChartError::InvalidTime {
        input: input.to_string(),
    })
}

/// Convert a calendar date and clock time to a Julian Day number.
///
/// Noon of any date lands on an integer; the fractional part encodes the
/// time of day. Monotonic in wall-clock time and bit-for-bit reproducible.
pub fn to_time_reference(date: NaiveDate, time: NaiveTime) -> f64 {
    let days = date.num_days_from_ce() as f64;
    let day_fraction = time.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY;
    days + CE_MIDNIGHT_OFFSET + day_fraction
}

/// Days elapsed since J2000.0.
pub fn days_since_epoch(time_ref: f64) -> f64 {
    time_ref - J2000
}
