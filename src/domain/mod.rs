//! Domain entities and value objects, independent of storage and transport.

pub mod hobby;
pub mod types;
