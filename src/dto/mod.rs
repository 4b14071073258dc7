//! Wire representations returned by the HTTP layer.

pub mod hobbies;
