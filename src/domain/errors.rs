// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// The bare message, without the layer prefix added by `Display`.
    /// Used when collecting field violations into a single report.
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg)
            | DomainError::Conflict(msg)
            | DomainError::NotFound(msg)
            | DomainError::Persistence(msg) => msg,
        }
    }
}
