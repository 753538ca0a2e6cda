//! Natal chart approximation and synastry scoring.
//!
//! A pure, synchronous pipeline: birth date/time → Julian Day → mean-motion
//! body longitudes and two angles → equal houses, aspects and elemental
//! balance → one immutable [`NatalChart`]. [`SynastryScorer`] compares two
//! charts. Nothing here performs I/O or keeps state between calls.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod settings;
pub mod synastry;
pub mod western;

pub use aspects::{Aspect, AspectCalculator, AspectKind, AspectMode};
pub use chart::{BirthData, ChartAssembler, House, NatalChart};
pub use ephemeris::{Angle, Body, BodyPosition, ZodiacSign};
pub use error::ChartError;
pub use settings::ChartSettings;
pub use synastry::{CompatibilityScore, ComponentScores, ScoreBand, SynastryScorer};
pub use western::{Element, ElementalProfile};
