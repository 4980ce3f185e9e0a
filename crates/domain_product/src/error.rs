//! Product domain errors

use thiserror::Error;

/// Errors that can occur while building products and their value objects
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// Interest rate outside [0, 100]
    #[error("Interest rate must be between 0 and 100, got {0}")]
    InterestRateOutOfRange(String),

    /// Term must be a positive number of months
    #[error("Term must be a positive number of months, got {0}")]
    NonPositiveTerm(i64),

    /// Principal ceiling must be positive
    #[error("Principal ceiling must be positive, got {0}")]
    NonPositiveCeiling(String),

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Product code not recognised
    #[error("Unknown product code: {0}")]
    UnknownProductCode(String),
}
