//! Mean-motion approximation of body longitudes.
//!
//! Each body moves linearly from a reference longitude at J2000.0. This is a
//! deterministic model, not an ephemeris.

use crate::ephemeris::time::days_since_epoch;
use crate::ephemeris::types::{normalize_degrees, split_longitude, Body, RawPosition};
use std::f64::consts::PI;

/// Orbital elements for the linear model.
#[derive(Debug, Clone, Copy)]
pub struct MeanElements {
    /// Longitude at J2000.0 (degrees)
    pub reference_longitude: f64,
    /// Mean motion (degrees per day)
    pub daily_motion: f64,
    /// Synodic period (days) driving the retrograde stand-in
    pub synodic_period: Option<f64>,
    /// Share of each synodic cycle spent retrograde
    pub retrograde_fraction: f64,
}

const fn elements(
    reference_longitude: f64,
    daily_motion: f64,
    synodic_period: Option<f64>,
    retrograde_fraction: f64,
) -> MeanElements {
    MeanElements {
        reference_longitude,
        daily_motion,
        synodic_period,
        retrograde_fraction,
    }
}

const BODY_ELEMENTS: &[(Body, MeanElements)] = &[
    (Body::Sun, elements(280.460, 0.985_647_4, None, 0.0)),
    (Body::Moon, elements(218.316, 13.176_396, None, 0.0)),
    (Body::Mercury, elements(252.251, 4.092_339, Some(115.88), 0.19)),
    (Body::Venus, elements(181.980, 1.602_131, Some(583.92), 0.07)),
    (Body::Mars, elements(355.433, 0.524_033, Some(779.94), 0.09)),
    (Body::Jupiter, elements(34.351, 0.083_091, Some(398.88), 0.30)),
    (Body::Saturn, elements(50.077, 0.033_460, Some(378.09), 0.36)),
    (Body::Uranus, elements(314.055, 0.011_733, Some(369.66), 0.41)),
    (Body::Neptune, elements(304.349, 0.005_965, Some(367.49), 0.43)),
    (Body::Pluto, elements(238.929, 0.003_964, Some(366.73), 0.44)),
];

pub fn mean_elements(body: Body) -> MeanElements {
    BODY_ELEMENTS[body as usize].1
}

/// Absolute longitude of `body` at `time_ref`, in [0, 360).
pub fn mean_longitude(time_ref: f64, body: Body) -> f64 {
    let el = mean_elements(body);
    normalize_degrees(el.reference_longitude + el.daily_motion * days_since_epoch(time_ref))
}

/// Periodic stand-in for apparent retrograde motion.
///
/// The body is flagged while `cos(2π·t/synodic)` sits below `-cos(π·fraction)`,
/// i.e. for `fraction` of every synodic cycle, centred on mid-cycle.
pub fn is_retrograde(time_ref: f64, body: Body) -> bool {
    if body.is_luminary() {
        return false;
    }
    let el = mean_elements(body);
    let Some(period) = el.synodic_period else {
        return false;
    };
    let phase = 2.0 * PI * days_since_epoch(time_ref) / period;
    phase.cos() < -(PI * el.retrograde_fraction).cos()
}

/// Approximate one body's position. Total for any finite `time_ref`.
pub fn approximate(time_ref: f64, body: Body) -> RawPosition {
    let longitude = mean_longitude(time_ref, body);
    let (sign, degree_in_sign) = split_longitude(longitude);
    RawPosition {
        body,
        longitude,
        sign,
        degree_in_sign,
        is_retrograde: is_retrograde(time_ref, body),
    }
}

/// Approximate all ten bodies in enumeration order.
pub fn approximate_all(time_ref: f64) -> Vec<RawPosition> {
    Body::ALL.iter().map(|&body| approximate(time_ref, body)).collect()
}
