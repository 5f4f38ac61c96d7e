//! DTOs for standings_sea adapter.

use time::OffsetDateTime;

/// DTO for creating a zeroed standing row.
#[derive(Debug, Clone)]
pub struct StandingCreate {
    pub team_key: String,
    pub display_name: String,
    pub display_emoji: Option<String>,
}

/// DTO for overwriting a standing's aggregate columns.
///
/// Derived columns (`win_percentage`, `set_differential`) are carried
/// explicitly so the adapter never re-derives anything.
#[derive(Debug, Clone)]
pub struct AggregateUpdate {
    pub wins: i32,
    pub losses: i32,
    pub games_played: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
    pub points_for: i32,
    pub points_against: i32,
    pub win_percentage: f64,
    pub set_differential: i32,
    pub last_match_at: Option<OffsetDateTime>,
}
