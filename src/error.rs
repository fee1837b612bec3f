use thiserror::Error;

#[derive(Debug, Error)]
pub enum NNError {
    // Construction related errors
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // Shape related errors, surfaced per call
    #[error("Dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    // Training stopped by the caller
    #[error("Training cancelled before epoch {epoch}")]
    Cancelled { epoch: usize },

    // Ambient IO
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NNError {
    pub(crate) fn mismatch(context: &'static str, expected: usize, got: usize) -> Self {
        NNError::DimensionMismatch {
            context,
            expected,
            got,
        }
    }

    /// True when the error is an intentional cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, NNError::Cancelled { .. })
    }

    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, NNError::DimensionMismatch { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, NNError::InvalidConfiguration(_))
    }
}

pub type Result<T> = std::result::Result<T, NNError>;
