pub mod harmony;
pub mod scorer;
pub mod types;

pub use harmony::{element_harmony, sign_harmony};
pub use scorer::SynastryScorer;
pub use types::{CompatibilityScore, ComponentScores, ScoreBand};
