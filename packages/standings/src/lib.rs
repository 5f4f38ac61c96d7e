#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! League standings core.
//!
//! An append-only ledger of match results plus per-team cumulative
//! aggregates, with reconciliation against an external membership source
//! and log-driven integrity validation/repair. The surrounding command
//! layer (chat bot, CLI, whatever) calls the four services and renders the
//! errors; nothing in here talks to users.

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod membership;
pub mod repos;
pub mod services;
pub mod state;

// Re-exports for public API
pub use config::db::{db_url, DbOwner, DbProfile};
pub use db::txn::with_txn;
pub use error::AppError;
pub use errors::domain::DomainError;
pub use infra::db::{bootstrap_schema, connect_db, connect_sqlite_memory};
pub use membership::{MembershipSource, TeamInfo};
pub use services::{
    IntegrityReport, IntegrityService, LedgerService, NewResult, ReconcileService,
    ReconcileSummary, RepairSummary, TeamRef,
};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    standings_test_support::logging::init();
}
