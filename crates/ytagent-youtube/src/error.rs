//! Upload error types.

use thiserror::Error;

pub type UploadResult<T> = Result<T, UploadError>;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid schedule time: {0}")]
    InvalidSchedule(String),

    #[error("Invalid privacy status: {0}")]
    InvalidPrivacy(String),

    #[error("Upload rejected: {0}")]
    Rejected(String),

    #[error("Uploader unavailable: {0}")]
    Unavailable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UploadError {
    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            UploadError::InvalidSchedule(_) | UploadError::InvalidPrivacy(_)
        )
    }
}
