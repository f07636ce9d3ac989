//! Client Errors
//!
//! Every backend call returns `ApiResult`; nothing is swallowed.

use reqwest::StatusCode;
use thiserror::Error;

/// Common result type for backend operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures at the network boundary
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 4xx: the store refused the request (its own validation)
    #[error("Rejected by server ({status}): {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success status into the matching variant
    pub fn from_status(status: StatusCode, body: String) -> Self {
        if status.is_client_error() {
            ApiError::Rejected { status, body }
        } else {
            ApiError::Status { status, body }
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
