use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request violated one or more rules; the message lists them all.
    #[error("{0}")]
    Validation(String),
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The write would duplicate a unique value.
    #[error("conflict")]
    Conflict,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
