use crate::aspects::{Aspect, AspectCalculator};
use crate::chart::houses::{house_of, houses, House};
use crate::ephemeris::angles::{ASCENDANT_HOUSE, MIDHEAVEN_HOUSE};
use crate::ephemeris::types::{Angle, Body, BodyPosition, RawPosition, SIGN_WIDTH};
use crate::error::ChartError;
use crate::western::{aggregate, ChartPoint, ElementalProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Birth record as supplied by the profile store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    /// HH:MM; falls back to the configured default when absent
    #[serde(rename = "birthTime", default, skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<String>,
    /// Accepted but not used numerically by the angle formulas
    #[serde(rename = "birthPlace", default)]
    pub birth_place: String,
}

/// Immutable natal chart.
///
/// Built in two phases: raw longitudes first, then every house number is
/// derived in one pass once the ascendant is known. Deserialized charts go
/// through the same invariant checks as freshly assembled ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NatalChartRepr")]
pub struct NatalChart {
    #[serde(rename = "timeReference")]
    time_reference: f64,
    bodies: BTreeMap<Body, BodyPosition>,
    ascendant: Angle,
    midheaven: Angle,
    houses: Vec<House>,
    aspects: Vec<Aspect>,
    #[serde(rename = "elementalProfile")]
    elemental_profile: ElementalProfile,
}

/// Unchecked wire form of a stored chart.
#[derive(Deserialize)]
struct NatalChartRepr {
    #[serde(rename = "timeReference")]
    time_reference: f64,
    bodies: BTreeMap<Body, BodyPosition>,
    ascendant: Angle,
    midheaven: Angle,
    houses: Vec<House>,
    aspects: Vec<Aspect>,
    #[serde(rename = "elementalProfile")]
    elemental_profile: ElementalProfile,
}

impl TryFrom<NatalChartRepr> for NatalChart {
    type Error = ChartError;

    fn try_from(repr: NatalChartRepr) -> Result<Self, Self::Error> {
        let chart = Self {
            time_reference: repr.time_reference,
            bodies: repr.bodies,
            ascendant: repr.ascendant,
            midheaven: repr.midheaven,
            houses: repr.houses,
            aspects: repr.aspects,
            elemental_profile: repr.elemental_profile,
        };
        chart.validate()?;
        Ok(chart)
    }
}

impl NatalChart {
    /// Place raw positions against the angles and derive houses, aspects and
    /// the elemental profile. Every chart invariant is checked before returning.
    pub fn from_raw(
        time_reference: f64,
        raw: &[RawPosition],
        ascendant_longitude: f64,
        midheaven_longitude: f64,
        calculator: &AspectCalculator,
    ) -> Result<Self, ChartError> {
        check_longitude("angles", "ascendant", ascendant_longitude)?;
        check_longitude("angles", "midheaven", midheaven_longitude)?;

        let mut bodies = BTreeMap::new();
        for pos in raw {
            check_longitude("bodies", pos.body.as_str(), pos.longitude)?;
            let house = house_of(pos.longitude, ascendant_longitude);
            if bodies.insert(pos.body, BodyPosition::from_raw(pos, house)).is_some() {
                return Err(ChartError::computation(
                    "bodies",
                    format!("duplicate position for {}", pos.body),
                ));
            }
        }
        let ascendant = BodyPosition::angle(ascendant_longitude, ASCENDANT_HOUSE);
        let midheaven = BodyPosition::angle(midheaven_longitude, MIDHEAVEN_HOUSE);
        let houses = houses(ascendant_longitude);

        let longitudes: BTreeMap<Body, f64> =
            bodies.iter().map(|(body, pos)| (*body, pos.longitude)).collect();
        let aspects = calculator.detect_aspects(&longitudes);

        let mut placements: Vec<(ChartPoint, _)> = bodies
            .iter()
            .map(|(body, pos)| (ChartPoint::Body(*body), pos.sign))
            .collect();
        placements.push((ChartPoint::Ascendant, ascendant.sign));
        let elemental_profile = aggregate(&placements);

        let chart = Self {
            time_reference,
            bodies,
            ascendant,
            midheaven,
            houses,
            aspects,
            elemental_profile,
        };
        chart.validate()?;
        Ok(chart)
    }

    fn validate(&self) -> Result<(), ChartError> {
        if !self.time_reference.is_finite() {
            return Err(ChartError::computation("time", "time reference is not finite"));
        }
        if let Some(missing) = Body::ALL.iter().find(|b| !self.bodies.contains_key(b)) {
            return Err(ChartError::computation(
                "bodies",
                format!("missing position for {}", missing),
            ));
        }
        let positions = self
            .bodies
            .values()
            .chain([&self.ascendant, &self.midheaven]);
        for pos in positions {
            check_longitude("placement", pos.sign.as_str(), pos.longitude)?;
            if !(0.0..SIGN_WIDTH).contains(&pos.degree_in_sign) {
                return Err(ChartError::computation(
                    "placement",
                    format!("degree in sign {} outside [0, 30)", pos.degree_in_sign),
                ));
            }
            if !(1..=12).contains(&pos.house_number) {
                return Err(ChartError::computation(
                    "placement",
                    format!("house number {} outside 1-12", pos.house_number),
                ));
            }
        }
        let numbered = self
            .houses
            .iter()
            .enumerate()
            .all(|(i, house)| house.number as usize == i + 1);
        if self.houses.len() != 12 || !numbered {
            return Err(ChartError::computation("houses", "expected houses 1-12 in order"));
        }
        if let Some(aspect) = self.aspects.iter().find(|a| a.orb > a.kind.tolerance()) {
            return Err(ChartError::computation(
                "aspects",
                format!("{} orb {} exceeds tolerance", aspect.kind, aspect.orb),
            ));
        }
        let total = self.elemental_profile.total();
        if !(97..=103).contains(&total) {
            return Err(ChartError::computation(
                "elements",
                format!("elemental percentages sum to {}", total),
            ));
        }
        Ok(())
    }

    pub fn time_reference(&self) -> f64 {
        self.time_reference
    }

    pub fn position(&self, body: Body) -> &BodyPosition {
        // Every NatalChart holds all ten bodies; construction rejects anything less
        &self.bodies[&body]
    }

    pub fn bodies(&self) -> impl Iterator<Item = (Body, &BodyPosition)> {
        self.bodies.iter().map(|(body, pos)| (*body, pos))
    }

    pub fn longitudes(&self) -> BTreeMap<Body, f64> {
        self.bodies.iter().map(|(body, pos)| (*body, pos.longitude)).collect()
    }

    pub fn ascendant(&self) -> &Angle {
        &self.ascendant
    }

    pub fn midheaven(&self) -> &Angle {
        &self.midheaven
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn elemental_profile(&self) -> &ElementalProfile {
        &self.elemental_profile
    }
}

fn check_longitude(stage: &str, what: &str, longitude: f64) -> Result<(), ChartError> {
    if longitude.is_finite() && (0.0..360.0).contains(&longitude) {
        Ok(())
    } else {
        Err(ChartError::computation(
            stage,
            format!("{} longitude {} outside [0, 360)", what, longitude),
        ))
    }
}
