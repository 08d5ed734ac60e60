pub mod error;
pub mod execution;
pub mod ports;
pub mod rule;

// Handy re-exports to keep imports short elsewhere
pub use error::{DomainError, RepositoryError, ValidationError};
