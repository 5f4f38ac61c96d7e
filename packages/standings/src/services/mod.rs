//! Domain services: the four ledger operations.

pub mod integrity;
pub mod ledger;
pub mod reconcile;

pub use integrity::{Discrepancy, IntegrityReport, IntegrityService, RepairSummary};
pub use ledger::{LedgerService, NewResult, TeamRef};
pub use reconcile::{ReconcileService, ReconcileSummary};
