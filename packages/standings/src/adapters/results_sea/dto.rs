//! DTOs for results_sea adapter.

use time::OffsetDateTime;

/// DTO for appending a match result to the ledger.
///
/// `winner_key` is derived by the service before the insert; the adapter
/// stores it verbatim.
#[derive(Debug, Clone)]
pub struct ResultCreate {
    pub team_a_key: String,
    pub team_b_key: String,
    pub sets_for_a: i16,
    pub sets_for_b: i16,
    pub points_for_a: i32,
    pub points_for_b: i32,
    pub winner_key: String,
    pub recorded_at: OffsetDateTime,
    pub reported_by: Option<String>,
}
