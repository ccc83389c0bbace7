//! Error types for the rendering service client.

use thiserror::Error;

/// Errors from logo upload, rendering and the print pipeline.
///
/// Every error ends the current print action. Nothing is retried.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The logo upload returned a non-success status
    #[error("Logo upload failed ({status}): {detail}")]
    UploadFailure {
        /// HTTP status code.
        status: u16,
        /// Server detail, or the status reason when the body is empty.
        detail: String,
    },

    /// The rendering service returned a non-success status
    #[error("Rendering service returned {status}: {body}")]
    RenderServiceFailure {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The service could not be reached or the response could not be read
    #[error("Rendering service unreachable: {0}")]
    Transport(String),

    /// The logo file is not a supported image
    #[error("Invalid logo: {0}")]
    InvalidLogo(String),

    /// Another print action is still running
    #[error("A print job is already in progress")]
    PrintInProgress,

    /// Local file I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl ServiceError {
    /// Whether the failure happened before the render request was sent.
    pub fn is_upload_failure(&self) -> bool {
        matches!(self, Self::UploadFailure { .. } | Self::InvalidLogo(_))
    }
}
