use sea_orm::ConnectionTrait;
use standings::repos::standings::{self as standings_repo, TeamStanding};
use standings::services::{NewResult, TeamRef};
use standings::{DomainError, TeamInfo};
use time::OffsetDateTime;

/// Roster entry for reconcile tests.
pub fn team(key: &str, name: &str) -> TeamInfo {
    TeamInfo::new(key, name)
}

/// A result submission between two teams: `sets`/`points` are (a, b).
pub fn result_between(a: &str, b: &str, sets: (i16, i16), points: (i32, i32)) -> NewResult {
    NewResult {
        team_a: TeamRef::new(a),
        team_b: TeamRef::new(b),
        sets_a: sets.0,
        sets_b: sets.1,
        points_a: points.0,
        points_b: points.1,
        reported_by: Some("tester".to_string()),
    }
}

/// Load a standing that must exist.
pub async fn standing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_key: &str,
) -> Result<TeamStanding, DomainError> {
    standings_repo::require_standing(conn, team_key).await
}

/// The aggregate columns of a standing as one comparable tuple
/// (everything the ledger determines, nothing housekeeping).
pub type Aggregates = (
    i32, // wins
    i32, // losses
    i32, // games_played
    i32, // sets_won
    i32, // sets_lost
    i32, // points_for
    i32, // points_against
    f64, // win_percentage
    i32, // set_differential
    Option<OffsetDateTime>,
);

pub fn aggregates(s: &TeamStanding) -> Aggregates {
    (
        s.wins,
        s.losses,
        s.games_played,
        s.sets_won,
        s.sets_lost,
        s.points_for,
        s.points_against,
        s.win_percentage,
        s.set_differential,
        s.last_match_at,
    )
}
