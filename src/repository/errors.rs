use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A write would violate a uniqueness constraint.
    #[error("conflict: {0}")]
    Conflict(String),
    /// The targeted row does not exist.
    #[error("not found")]
    NotFound,
    /// Stored data does not satisfy domain constraints.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// No connection could be obtained from the pool.
    #[error("connection error: {0}")]
    Connection(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(String),
}

impl RepositoryError {
    /// Whether the error signals a uniqueness violation.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

// The only place that knows how Diesel reports a unique-constraint violation.
impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::Conflict(info.message().to_string())
            }
            diesel::result::Error::DatabaseError(kind, info) => {
                RepositoryError::Database(format!("{kind:?}: {}", info.message()))
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}
