//! Adapters for external dependencies.
//!
//! Adapter functions return `sea_orm::DbErr`; the repos layer maps to
//! `DomainError` via `From<DbErr>`.

pub mod results_sea;
pub mod standings_sea;
