//! Client domain errors
//!
//! Every variant is raised by a value-object constructor. Once a `Client`
//! exists none of these can occur.

use thiserror::Error;

/// Errors that can occur while building client value objects
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Age outside the plausible human range
    #[error("Age must be between {min} and {max}, got {actual}")]
    AgeOutOfRange {
        min: u32,
        max: u32,
        actual: i64,
    },

    /// Credit score outside the FICO range
    #[error("Credit score must be between {min} and {max}, got {actual}")]
    CreditScoreOutOfRange {
        min: u16,
        max: u16,
        actual: i64,
    },

    /// Income below zero
    #[error("Monthly income cannot be negative: {0}")]
    NegativeIncome(String),

    /// A name part was empty or whitespace
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// State code outside the supported set
    #[error("Unsupported state: {0}")]
    UnsupportedState(String),
}

impl ClientError {
    /// Creates a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        ClientError::MissingRequiredField(field.into())
    }
}
