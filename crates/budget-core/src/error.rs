//! Error Types
//!
//! Structured errors returned to pages instead of blocking alerts.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure talking to the budget API.
///
/// Kept `Clone` so it can sit inside reactive state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not authorized")]
    Unauthorized,

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16(), message: err.to_string() }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Why a form submission did not go through
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Blocked before any request was issued
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),

    /// An earlier submission has not returned yet
    #[error("Submission already in flight")]
    InFlight,

    #[error(transparent)]
    Request(#[from] ApiError),
}

impl SubmitError {
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::InFlight | SubmitError::Request(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status { status: 500, message: "boom".to_string() };
        assert_eq!(err.to_string(), "Request failed with status 500: boom");
        assert!(!err.is_unauthorized());
        assert!(ApiError::Unauthorized.is_unauthorized());
    }

    #[test]
    fn test_submit_error_from_api_error() {
        let err: SubmitError = ApiError::Network("offline".to_string()).into();
        assert!(err.validation().is_none());
        assert_eq!(err.to_string(), "Network error: offline");
    }
}
