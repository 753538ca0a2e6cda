//! Equal-house system anchored at the ascendant.

use crate::ephemeris::types::{normalize_degrees, split_longitude, ZodiacSign, SIGN_WIDTH};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub number: u8,
    pub sign: ZodiacSign,
    #[serde(rename = "degreeAtCusp")]
    pub degree_at_cusp: f64,
    /// Absolute cusp longitude (0-360)
    #[serde(rename = "cuspLongitude")]
    pub cusp_longitude: f64,
}

/// Cusp longitude of house `number` (1-12).
pub fn cusp_longitude(rising_longitude: f64, number: u8) -> f64 {
    normalize_degrees(rising_longitude + (number as f64 - 1.0) * SIGN_WIDTH)
}

/// Twelve contiguous 30° houses, house 1 starting at the rising longitude.
pub fn houses(rising_longitude: f64) -> Vec<House> {
    (1..=12u8)
        .map(|number| {
            let cusp = cusp_longitude(rising_longitude, number);
            let (sign, degree_at_cusp) = split_longitude(cusp);
            House {
                number,
                sign,
                degree_at_cusp,
                cusp_longitude: cusp,
            }
        })
        .collect()
}

/// House (1-12) containing `longitude` for the given rising longitude.
pub fn house_of(longitude: f64, rising_longitude: f64) -> u8 {
    let offset = (longitude - rising_longitude + 360.0).rem_euclid(360.0);
    let index = (offset / SIGN_WIDTH).floor() as u8;
    index.min(11) + 1
}
