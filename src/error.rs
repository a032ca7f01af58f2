//! Shared error types for the engine

use thiserror::Error;

/// Main error type for chargesite operations
#[derive(Debug, Error)]
pub enum Error {
    /// A ratio whose denominator is zero, e.g. ROI on a zero investment
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// Input signals outside their documented ranges
    #[error("Validation error: {0}")]
    Validation(String),

    /// Weight sets that are out of range or do not sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Age bracket label outside the fixed set
    #[error("Unknown age bracket '{0}' (expected one of 18-24, 25-40, 41-55, 55+)")]
    UnknownAgeBracket(String),

    /// City name not present in the reference table
    #[error("Unknown city '{0}'")]
    UnknownCity(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a division-by-zero error naming the quantity being computed
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Create a validation error from a list of individual issues
    pub fn validation(issues: &[String]) -> Self {
        Self::Validation(issues.join("; "))
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
