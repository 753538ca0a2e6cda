//! Ascendant and midheaven approximations.
//!
//! Neither formula consumes geographic coordinates: the birth place is
//! accepted upstream but does not move these angles. Charts already stored
//! depend on that, so it stays until the formulas are deliberately replaced.

use crate::ephemeris::time::days_since_epoch;
use crate::ephemeris::types::{normalize_degrees, Angle, BodyPosition};
use chrono::{NaiveTime, Timelike};

pub const ASCENDANT_HOUSE: u8 = 1;
pub const MIDHEAVEN_HOUSE: u8 = 10;

const TROPICAL_YEAR_DAYS: f64 = 365.25;

/// Rising longitude: clock time scaled onto the full circle (15° per hour).
pub fn rising_longitude(clock_time: NaiveTime) -> f64 {
    let minutes = (clock_time.hour() * 60 + clock_time.minute()) as f64;
    normalize_degrees(minutes / 1440.0 * 360.0)
}

/// Culmination longitude: fraction of the year elapsed since J2000.0, scaled to 360°.
pub fn culmination_longitude(time_ref: f64) -> f64 {
    let year_fraction =
        days_since_epoch(time_ref).rem_euclid(TROPICAL_YEAR_DAYS) / TROPICAL_YEAR_DAYS;
    normalize_degrees(year_fraction * 360.0)
}

/// Ascendant; `time_ref` is unused by the current formula.
pub fn rising_angle(_time_ref: f64, clock_time: NaiveTime) -> Angle {
    BodyPosition::angle(rising_longitude(clock_time), ASCENDANT_HOUSE)
}

pub fn culmination_angle(time_ref: f64) -> Angle {
    BodyPosition::angle(culmination_longitude(time_ref), MIDHEAVEN_HOUSE)
}
