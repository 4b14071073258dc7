//! Request shapes accepted by the HTTP layer and their validation rules.

pub mod hobbies;
