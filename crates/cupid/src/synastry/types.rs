use serde::{Deserialize, Serialize};

/// Qualitative band of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 60-79
    Good,
    /// Below 60
    Challenging,
}

impl ScoreBand {
    pub fn from_score(overall: u8) -> Self {
        if overall >= 80 {
            ScoreBand::Excellent
        } else if overall >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::Challenging
        }
    }
}

/// Per-component sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    #[serde(rename = "elementalHarmony")]
    pub elemental_harmony: u8,
    #[serde(rename = "sunMoon")]
    pub sun_moon: u8,
    #[serde(rename = "venusVenus")]
    pub venus_venus: u8,
    #[serde(rename = "marsMars")]
    pub mars_mars: u8,
    #[serde(rename = "ascendantAscendant")]
    pub ascendant_ascendant: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub overall: u8,
    pub band: ScoreBand,
    #[serde(rename = "componentScores")]
    pub component_scores: ComponentScores,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
}
