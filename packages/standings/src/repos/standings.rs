//! Standings repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::standings_sea as standings_adapter;
use crate::domain::tally::Tally;
use crate::entities::team_standings;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Team standing domain model: the current cumulative aggregate for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStanding {
    pub team_key: String,
    pub display_name: String,
    pub display_emoji: Option<String>,
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
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TeamStanding {
    /// The stored counters as a [`Tally`], for incremental updates and
    /// invariant checks.
    pub fn tally(&self) -> Tally {
        Tally {
            wins: self.wins,
            losses: self.losses,
            games_played: self.games_played,
            sets_won: self.sets_won,
            sets_lost: self.sets_lost,
            points_for: self.points_for,
            points_against: self.points_against,
        }
    }
}

// Free functions (generic) for standing operations

pub async fn find_by_key<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_key: &str,
) -> Result<Option<TeamStanding>, DomainError> {
    let standing = standings_adapter::find_by_key(conn, team_key).await?;
    Ok(standing.map(TeamStanding::from))
}

/// Find a standing with its row locked until the transaction ends.
///
/// Mutating paths read through here so concurrent updates to the same
/// team serialize instead of overwriting each other from stale counters.
pub async fn find_by_key_for_update(
    txn: &DatabaseTransaction,
    team_key: &str,
) -> Result<Option<TeamStanding>, DomainError> {
    let standing = standings_adapter::find_by_key_for_update(txn, team_key).await?;
    Ok(standing.map(TeamStanding::from))
}

/// Find standing by key or return error if not found.
pub async fn require_standing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_key: &str,
) -> Result<TeamStanding, DomainError> {
    find_by_key(conn, team_key).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Team, format!("Team '{team_key}' not found"))
    })
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<TeamStanding>, DomainError> {
    let standings = standings_adapter::find_all(conn).await?;
    Ok(standings.into_iter().map(TeamStanding::from).collect())
}

/// All standings in leaderboard order.
pub async fn find_all_ranked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<TeamStanding>, DomainError> {
    let standings = standings_adapter::find_all_ranked(conn).await?;
    Ok(standings.into_iter().map(TeamStanding::from).collect())
}

/// Create a zeroed standing row for a team.
pub async fn create_zeroed(
    txn: &DatabaseTransaction,
    team_key: &str,
    display_name: &str,
    display_emoji: Option<&str>,
) -> Result<TeamStanding, DomainError> {
    let standing = standings_adapter::insert_zeroed(
        txn,
        standings_adapter::StandingCreate {
            team_key: team_key.to_string(),
            display_name: display_name.to_string(),
            display_emoji: display_emoji.map(|s| s.to_string()),
        },
    )
    .await?;
    Ok(TeamStanding::from(standing))
}

/// Overwrite a standing's aggregate columns from a tally.
pub async fn update_aggregates(
    txn: &DatabaseTransaction,
    team_key: &str,
    tally: &Tally,
    last_match_at: Option<OffsetDateTime>,
) -> Result<TeamStanding, DomainError> {
    let standing = standings_adapter::update_aggregates(
        txn,
        team_key,
        standings_adapter::AggregateUpdate {
            wins: tally.wins,
            losses: tally.losses,
            games_played: tally.games_played,
            sets_won: tally.sets_won,
            sets_lost: tally.sets_lost,
            points_for: tally.points_for,
            points_against: tally.points_against,
            win_percentage: tally.win_percentage(),
            set_differential: tally.set_differential(),
            last_match_at,
        },
    )
    .await?;
    Ok(TeamStanding::from(standing))
}

/// Refresh the denormalized display columns.
pub async fn update_display(
    txn: &DatabaseTransaction,
    team_key: &str,
    display_name: &str,
    display_emoji: Option<&str>,
) -> Result<TeamStanding, DomainError> {
    let standing =
        standings_adapter::update_display(txn, team_key, display_name, display_emoji).await?;
    Ok(TeamStanding::from(standing))
}

/// Delete a standing row. Returns true if a row was deleted.
pub async fn delete_by_key(
    txn: &DatabaseTransaction,
    team_key: &str,
) -> Result<bool, DomainError> {
    let rows = standings_adapter::delete_by_key(txn, team_key).await?;
    Ok(rows > 0)
}

// Conversions between SeaORM models and domain models

impl From<team_standings::Model> for TeamStanding {
    fn from(model: team_standings::Model) -> Self {
        Self {
            team_key: model.team_key,
            display_name: model.display_name,
            display_emoji: model.display_emoji,
            wins: model.wins,
            losses: model.losses,
            games_played: model.games_played,
            sets_won: model.sets_won,
            sets_lost: model.sets_lost,
            points_for: model.points_for,
            points_against: model.points_against,
            win_percentage: model.win_percentage,
            set_differential: model.set_differential,
            last_match_at: model.last_match_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
