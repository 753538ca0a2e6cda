//! Elemental balance of a chart.
//!
//! Each sign belongs to one of four elements. Every body and the ascendant
//! carries a fixed importance weight; the weights falling in each element are
//! summed and expressed as a percentage of the total.

use crate::ephemeris::types::{Body, ZodiacSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn of(sign: ZodiacSign) -> Element {
        match sign {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    /// Fire/air and earth/water feed each other.
    pub fn is_complementary(&self, other: Element) -> bool {
        matches!(
            (self, other),
            (Element::Fire, Element::Air)
                | (Element::Air, Element::Fire)
                | (Element::Earth, Element::Water)
                | (Element::Water, Element::Earth)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

/// Anything that contributes to the elemental balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPoint {
    Body(Body),
    Ascendant,
}

impl ChartPoint {
    /// Fixed importance weights; the eleven points sum to 1.0.
    pub fn importance_weight(&self) -> f64 {
        match self {
            ChartPoint::Body(Body::Sun) => 0.25,
            ChartPoint::Body(Body::Moon) => 0.20,
            ChartPoint::Body(Body::Mercury) => 0.10,
            ChartPoint::Body(Body::Venus) => 0.10,
            ChartPoint::Body(Body::Mars) => 0.10,
            ChartPoint::Body(Body::Jupiter) => 0.08,
            ChartPoint::Body(Body::Saturn) => 0.07,
            ChartPoint::Body(Body::Uranus) => 0.03,
            ChartPoint::Body(Body::Neptune) => 0.03,
            ChartPoint::Body(Body::Pluto) => 0.02,
            ChartPoint::Ascendant => 0.02,
        }
    }
}

/// Four-element percentage breakdown.
///
/// Each percentage is rounded on its own, so the four need not add up to
/// exactly 100; the sum stays within a couple of points of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementalProfile {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

impl ElementalProfile {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    pub fn total(&self) -> u32 {
        self.fire + self.earth + self.air + self.water
    }

    /// Element holding the largest share; ties resolve in fire, earth, air, water order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Fire;
        for element in Element::ALL {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }
}

/// Aggregate weighted sign placements into an elemental profile.
pub fn aggregate(placements: &[(ChartPoint, ZodiacSign)]) -> ElementalProfile {
    let mut raw = [0.0f64; 4];
    for (point, sign) in placements {
        raw[Element::of(*sign) as usize] += point.importance_weight();
    }

    let total: f64 = raw.iter().sum();
    if total <= 0.0 {
        return ElementalProfile::default();
    }

    let percent = |weight: f64| (100.0 * weight / total).round() as u32;
    ElementalProfile {
        fire: percent(raw[Element::Fire as usize]),
        earth: percent(raw[Element::Earth as usize]),
        air: percent(raw[Element::Air as usize]),
        water: percent(raw[Element::Water as usize]),
    }
}
