pub use errors::{ServiceError, ServiceResult};

pub mod errors;
pub mod hobbies;
