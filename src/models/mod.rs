//! Diesel row types and their conversions to domain entities.

pub mod config;
pub mod hobby;
