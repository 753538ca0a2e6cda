use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of degrees spanned by one zodiac sign.
pub const SIGN_WIDTH: f64 = 30.0;

/// The ten modelled celestial bodies, in chart enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
        }
    }

    /// Sun and moon are never flagged retrograde.
    pub fn is_luminary(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign index 0 (aries) .. 11 (pisces); wraps modulo 12.
    pub fn from_index(index: usize) -> ZodiacSign {
        Self::ALL[index % 12]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize any longitude into [0, 360).
pub fn normalize_degrees(longitude: f64) -> f64 {
    let lon = longitude.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if lon >= 360.0 {
        0.0
    } else {
        lon
    }
}

/// Split an absolute longitude into its sign and degree within that sign.
pub fn split_longitude(longitude: f64) -> (ZodiacSign, f64) {
    let lon = normalize_degrees(longitude);
    let sign_index = (lon / SIGN_WIDTH).floor() as usize;
    let degree_in_sign = lon - sign_index as f64 * SIGN_WIDTH;
    // Guard the [0, 30) bound against floating error at sign boundaries
    if degree_in_sign >= SIGN_WIDTH {
        (ZodiacSign::from_index(sign_index + 1), 0.0)
    } else {
        (ZodiacSign::from_index(sign_index), degree_in_sign.max(0.0))
    }
}

/// An approximated ecliptic position before any house is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    pub body: Body,
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    pub sign: ZodiacSign,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    #[serde(rename = "isRetrograde")]
    pub is_retrograde: bool,
}

/// A fully placed position: body or angle, with its house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub longitude: f64,
    pub sign: ZodiacSign,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    #[serde(rename = "houseNumber")]
    pub house_number: u8,
    #[serde(rename = "isRetrograde")]
    pub is_retrograde: bool,
}

/// Angles share the body position shape; they never retrograde.
pub type Angle = BodyPosition;

impl BodyPosition {
    pub fn from_raw(raw: &RawPosition, house_number: u8) -> Self {
        Self {
            longitude: raw.longitude,
            sign: raw.sign,
            degree_in_sign: raw.degree_in_sign,
            house_number,
            is_retrograde: raw.is_retrograde,
        }
    }

    pub fn angle(longitude: f64, house_number: u8) -> Angle {
        let longitude = normalize_degrees(longitude);
        let (sign, degree_in_sign) = split_longitude(longitude);
        Self {
            longitude,
            sign,
            degree_in_sign,
            house_number,
            is_retrograde: false,
        }
    }
}
