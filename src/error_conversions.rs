//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the `From` implementations live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::forms::hobbies::HobbyFormError;
    use crate::services::errors::ServiceError;

    impl From<HobbyFormError> for ServiceError {
        fn from(val: HobbyFormError) -> Self {
            match val {
                HobbyFormError::Validation(message) => ServiceError::Validation(message),
                HobbyFormError::TypeConstraint(message) => ServiceError::Validation(message),
            }
        }
    }
}
