use crate::ephemeris::types::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }

    /// Exact separation for this aspect (0, 60, 90, 120, 180)
    pub fn nominal_angle(&self) -> f64 {
        self.definition().nominal_angle
    }

    /// Largest orb at which the aspect still counts
    pub fn tolerance(&self) -> f64 {
        self.definition().tolerance
    }

    fn definition(&self) -> AspectDefinition {
        ASPECT_TABLE[*self as usize]
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub nominal_angle: f64,
    pub tolerance: f64,
}

/// Fixed aspect table, checked in this order for every pair.
pub const ASPECT_TABLE: [AspectDefinition; 5] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        nominal_angle: 0.0,
        tolerance: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        nominal_angle: 60.0,
        tolerance: 6.0,
    },
    AspectDefinition {
        kind: AspectKind::Square,
        nominal_angle: 90.0,
        tolerance: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        nominal_angle: 120.0,
        tolerance: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        nominal_angle: 180.0,
        tolerance: 8.0,
    },
];

/// How the separation between two longitudes is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectMode {
    /// Raw `|a - b|`. Separations above 180° are not folded, so e.g. a
    /// 270° separation never registers as a square.
    #[default]
    Literal,
    /// Separations above 180° are folded to `360 - sep`.
    ShortestArc,
}

/// A detected angular relationship between two bodies of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    #[serde(rename = "bodyA")]
    pub body_a: Body,
    #[serde(rename = "bodyB")]
    pub body_b: Body,
    pub kind: AspectKind,
    /// Absolute deviation from the nominal angle
    pub orb: f64,
}
