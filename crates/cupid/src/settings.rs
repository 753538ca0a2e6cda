use crate::aspects::AspectMode;
use crate::ephemeris::time::DEFAULT_BIRTH_TIME;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    /// Separation rule used by aspect detection
    pub aspect_mode: AspectMode,
    /// Clock time substituted when a birth record has none (HH:MM)
    pub default_birth_time: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            aspect_mode: AspectMode::Literal,
            default_birth_time: DEFAULT_BIRTH_TIME.to_string(),
        }
    }
}
