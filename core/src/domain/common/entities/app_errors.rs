use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
