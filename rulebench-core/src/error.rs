// rulebench-core/src/error.rs

use crate::domain::error::{DomainError, RepositoryError};
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

/// Error returned by the crate's entry points: the catalog, the HTTP client
/// constructor and the configuration loader.
#[derive(Error, Debug)]
pub enum RulebenchError {
    // --- DOMAIN ERRORS (client-side validation, invariants) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- REMOTE SERVICE ERRORS (non-2xx, network, decoding) ---
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    // --- INFRASTRUCTURE ERRORS (IO, config parsing, HTTP client setup) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl From<std::io::Error> for RulebenchError {
    fn from(err: std::io::Error) -> Self {
        RulebenchError::Infrastructure(InfrastructureError::Io(err))
    }
}
