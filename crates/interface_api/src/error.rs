//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use core_kernel::PortError;
use domain_client::ClientError;
use domain_loan::LoanError;
use domain_product::ProductError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Option<Vec<String>>,
    },
}

impl ApiError {
    /// Creates a validation error without field details
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_type, message, details) = match self {
            ApiError::NotFound(msg) => ("not_found", msg, None),
            ApiError::BadRequest(msg) => ("bad_request", msg, None),
            ApiError::Conflict(msg) => ("conflict", msg, None),
            ApiError::Internal(msg) => {
                error!(message = %msg, "Request failed");
                ("internal_error", msg, None)
            }
            ApiError::Validation { message, details } => ("validation_error", message, details),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = Vec::new();
        collect_validation_errors("", &errors, &mut details);
        details.sort();
        ApiError::Validation {
            message: "Request validation failed".to_string(),
            details: Some(details),
        }
    }
}

fn collect_validation_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for field_error in field_errors {
                    out.push(format!("{}: {}", path, field_error.code));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_validation_errors(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_errors(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Conflict { .. } => ApiError::Conflict(err.to_string()),
            PortError::Connection { .. } | PortError::Internal { .. } => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        match err {
            LoanError::InvalidConditions(_)
            | LoanError::PrincipalExceedsCeiling { .. }
            | LoanError::UnmappedProduct(_) => ApiError::validation(err.to_string()),
            LoanError::Product(inner) => inner.into(),
            LoanError::ClientNotFound(_)
            | LoanError::ProductNotFound(_)
            | LoanError::LoanNotFound(_) => ApiError::NotFound(err.to_string()),
            LoanError::UnregisteredRule(_) => ApiError::Internal(err.to_string()),
            LoanError::Repository(inner) => inner.into(),
        }
    }
}
