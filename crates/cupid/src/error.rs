use thiserror::Error;

/// Errors surfaced by chart assembly.
///
/// Input errors are reported as-is to the caller; there is no fallback chart.
/// `ComputationFailure` means an intermediate value broke a chart invariant,
/// which is a defect in the pipeline rather than a transient condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid birth date: {input:?}. Expected YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error("Invalid birth time: {input:?}. Expected 24-hour HH:MM")]
    InvalidTime { input: String },
    #[error("Computation failed during {stage}: {message}")]
    ComputationFailure { stage: String, message: String },
}

impl ChartError {
    pub(crate) fn computation(stage: &str, message: impl Into<String>) -> Self {
        ChartError::ComputationFailure {
            stage: stage.to_string(),
            message: message.into(),
        }
    }

    /// True for malformed caller input (as opposed to an internal defect).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChartError::InvalidDate { .. } | ChartError::InvalidTime { .. })
    }
}
