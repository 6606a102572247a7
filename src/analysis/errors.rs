//! Error types for sales analysis.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Missing strategy in options: {0}")]
    MissingStrategy(&'static str),

    #[error("Malformed sales data: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl AnalysisError {
    /// Whether the error was raised by input or options validation, before
    /// any aggregation started.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::InvalidOptions(_) | Self::MissingStrategy(_)
        )
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
