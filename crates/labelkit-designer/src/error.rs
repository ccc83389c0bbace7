//! Error type for session operations.

use crate::store::StoreError;
use labelkit_core::{TemplateError, ValidationError};
use labelkit_settings::SettingsError;
use thiserror::Error;

/// Errors from [`LabelSession`](crate::LabelSession) operations
#[derive(Error, Debug)]
pub enum DesignerError {
    /// Validation, bounds or template error
    #[error(transparent)]
    Core(#[from] labelkit_core::Error),

    /// Rejected style or option value
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The session could not be persisted
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<TemplateError> for DesignerError {
    fn from(err: TemplateError) -> Self {
        Self::Core(err.into())
    }
}

impl From<ValidationError> for DesignerError {
    fn from(err: ValidationError) -> Self {
        Self::Core(err.into())
    }
}

/// Result type for session operations
pub type DesignerResult<T> = Result<T, DesignerError>;
