use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    /// Carries the rejected token for logging; the message stays fixed.
    #[error("invalid account identifier")]
    InvalidAccountId(String),

    #[error("account not found")]
    NotFound(i64),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}
