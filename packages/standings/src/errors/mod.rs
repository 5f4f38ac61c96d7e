//! Error handling for the standings core.

pub mod domain;

pub use domain::DomainError;
