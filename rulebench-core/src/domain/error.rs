// rulebench-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

/// Client-local failures. None of these ever reaches the network.
#[derive(Error, Debug, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name required")]
    #[diagnostic(code(rulebench::validation::name))]
    NameRequired,

    #[error("condition required")]
    #[diagnostic(code(rulebench::validation::condition))]
    ConditionRequired,

    #[error("Payload is not valid JSON")]
    #[diagnostic(
        code(rulebench::validation::payload),
        help("The payload must be a single JSON value, e.g. {{\"amount\": 10}}.")
    )]
    PayloadNotJson,

    #[error("Select at least one rule to execute")]
    #[diagnostic(code(rulebench::validation::selection))]
    EmptySelection,
}

/// Failure of a round-trip with the rules service.
///
/// `Display` is the operator-facing message and the only thing callers use to
/// tell failures apart.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{message}")]
    #[diagnostic(code(rulebench::repository::rejected))]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    #[diagnostic(
        code(rulebench::repository::transport),
        help("Check that the rules service is reachable at the configured base URL.")
    )]
    Transport(String),

    #[error("{0}")]
    #[diagnostic(code(rulebench::repository::decode))]
    Decode(String),

    /// Empty, `.` and `..` collapse into a different path once placed in a URL.
    #[error("Rule id '{0}' cannot be addressed by the rules service")]
    #[diagnostic(code(rulebench::repository::unaddressable_id))]
    UnaddressableId(String),
}

impl RepositoryError {
    /// Non-2xx answer: the body wins when there is one, otherwise a generic
    /// message carrying the status code.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("Request failed with status {}", status)
        } else {
            body.to_string()
        };
        RepositoryError::Rejected { status, message }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invariant violation: {0}")]
    #[diagnostic(
        code(rulebench::domain::invariant),
        help("This is a logic defect: the rule id is unknown to the local collection.")
    )]
    InvariantViolation(String),

    #[error("Unknown condition type: {0}")]
    #[diagnostic(
        code(rulebench::domain::condition_type),
        help("Supported condition types are 'expression' and 'json'.")
    )]
    UnknownConditionType(String),
}
