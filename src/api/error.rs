// ==========================================
// LPA Audit System - API layer errors
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result alias for the API layer
pub type ApiResult<T> = Result<T, ApiError>;
