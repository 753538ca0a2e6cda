#![allow(dead_code)]

use cupid::aspects::AspectCalculator;
use cupid::ephemeris::{split_longitude, Body, RawPosition};
use cupid::NatalChart;

/// Longitudes for the bodies not under test; spread out so they stay valid.
const FILLER: [f64; 10] = [5.0, 40.0, 75.0, 110.0, 145.0, 200.0, 235.0, 270.0, 305.0, 340.0];

pub struct KeyPlacements {
    pub sun: f64,
    pub moon: f64,
    pub venus: f64,
    pub mars: f64,
    pub ascendant: f64,
}

pub fn raw(body: Body, longitude: f64, is_retrograde: bool) -> RawPosition {
    let (sign, degree_in_sign) = split_longitude(longitude);
    RawPosition {
        body,
        longitude,
        sign,
        degree_in_sign,
        is_retrograde,
    }
}

pub fn chart_from(p: &KeyPlacements) -> NatalChart {
    let raws: Vec<RawPosition> = Body::ALL
        .iter()
        .map(|&body| {
            let lon = match body {
                Body::Sun => p.sun,
                Body::Moon => p.moon,
                Body::Venus => p.venus,
                Body::Mars => p.mars,
                other => FILLER[other as usize],
            };
            raw(body, lon, false)
        })
        .collect();
    NatalChart::from_raw(2_451_545.0, &raws, p.ascendant, 90.0, &AspectCalculator::new())
        .expect("valid test chart")
}
