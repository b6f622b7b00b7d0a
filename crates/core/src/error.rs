//! Analysis error model.

use thiserror::Error;

/// Result type used across the analysis stages.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Fatal analysis failure.
///
/// Both variants are structural preconditions on the input table: a run that
/// hits one of them produces no partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input table is empty, has duplicate ids, or carries a missing,
    /// negative or non-finite field.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// A ratio had a zero denominator (e.g. all demand is zero).
    #[error("division by zero while computing {quantity}")]
    DivisionByZero { quantity: &'static str },
}

impl AnalysisError {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaViolation(msg.into())
    }

    pub fn division_by_zero(quantity: &'static str) -> Self {
        Self::DivisionByZero { quantity }
    }
}

/// Divide `numerator` by `denominator`, failing on a zero denominator.
///
/// `quantity` names the metric being computed and ends up in the error.
pub fn checked_ratio(numerator: f64, denominator: f64, quantity: &'static str) -> AnalysisResult<f64> {
    if denominator == 0.0 {
        return Err(AnalysisError::division_by_zero(quantity));
    }
    Ok(numerator / denominator)
}
