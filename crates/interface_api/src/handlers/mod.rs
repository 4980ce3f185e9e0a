//! Request handlers

pub mod clients;
pub mod health;
pub mod loans;
pub mod products;

use std::str::FromStr;

use crate::error::ApiError;

/// Parses a path id, accepting a bare UUID or the prefixed form
pub(crate) fn parse_id<T: FromStr>(raw: &str, kind: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {} id: {}", kind, raw)))
}
