//! Errors surfaced by the domain services.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Input rejected before anything was stored
    #[error("{0}")]
    Validation(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
