use crate::chart::NatalChart;
use crate::ephemeris::types::Body;
use crate::synastry::harmony::{commentary, sign_harmony};
use crate::synastry::types::{CompatibilityScore, ComponentScores, ScoreBand};
use rayon::prelude::*;

pub const ELEMENTAL_HARMONY_WEIGHT: f64 = 0.20;
pub const SUN_MOON_WEIGHT: f64 = 0.25;
pub const VENUS_WEIGHT: f64 = 0.25;
pub const MARS_WEIGHT: f64 = 0.15;
pub const ASCENDANT_WEIGHT: f64 = 0.15;

/// Compatibility scorer over two assembled charts. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynastryScorer;

impl SynastryScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn components(&self, a: &NatalChart, b: &NatalChart) -> ComponentScores {
        let sign = |chart: &NatalChart, body: Body| chart.position(body).sign;
        ComponentScores {
            elemental_harmony: sign_harmony(sign(a, Body::Sun), sign(b, Body::Sun)),
            // Directional: A's sun against B's moon
            sun_moon: sign_harmony(sign(a, Body::Sun), sign(b, Body::Moon)),
            venus_venus: sign_harmony(sign(a, Body::Venus), sign(b, Body::Venus)),
            mars_mars: sign_harmony(sign(a, Body::Mars), sign(b, Body::Mars)),
            ascendant_ascendant: sign_harmony(a.ascendant().sign, b.ascendant().sign),
        }
    }

    /// Weighted 0-100 score with banded commentary.
    pub fn score(&self, a: &NatalChart, b: &NatalChart) -> CompatibilityScore {
        let component_scores = self.components(a, b);
        let weighted = ELEMENTAL_HARMONY_WEIGHT * component_scores.elemental_harmony as f64
            + SUN_MOON_WEIGHT * component_scores.sun_moon as f64
            + VENUS_WEIGHT * component_scores.venus_venus as f64
            + MARS_WEIGHT * component_scores.mars_mars as f64
            + ASCENDANT_WEIGHT * component_scores.ascendant_ascendant as f64;
        let overall = weighted.round().clamp(0.0, 100.0) as u8;

        let band = ScoreBand::from_score(overall);
        let (strengths, challenges) = commentary(band);
        log::debug!("synastry overall={} band={:?} {:?}", overall, band, component_scores);

        CompatibilityScore {
            overall,
            band,
            component_scores,
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            challenges: challenges.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Score one chart against many candidates in parallel.
    ///
    /// Results come back in candidate order; ranking is left to the caller.
    pub fn score_candidates(
        &self,
        chart: &NatalChart,
        candidates: &[NatalChart],
    ) -> Vec<CompatibilityScore> {
        candidates
            .par_iter()
            .map(|candidate| self.score(chart, candidate))
            .collect()
    }

    /// `score(a, b).overall - score(b, a).overall`.
    ///
    /// The harmony table is symmetric but the sun/moon component compares A's
    /// sun with B's moon, so swapping the charts can move the overall score.
    pub fn symmetry_gap(&self, a: &NatalChart, b: &NatalChart) -> i32 {
        self.score(a, b).overall as i32 - self.score(b, a).overall as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total = ELEMENTAL_HARMONY_WEIGHT
            + SUN_MOON_WEIGHT
            + VENUS_WEIGHT
            + MARS_WEIGHT
            + ASCENDANT_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Challenging);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Challenging);
    }
}
