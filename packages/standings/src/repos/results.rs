//! Match-result repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::results_sea as results_adapter;
use crate::domain::tally::SideView;
use crate::entities::match_results;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Match result domain model: one immutable ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub result_id: i64,
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

impl MatchResult {
    /// Team A's view of this result.
    pub fn side_a(&self) -> SideView {
        SideView {
            won: self.winner_key == self.team_a_key,
            sets_won: self.sets_for_a,
            sets_lost: self.sets_for_b,
            points_for: self.points_for_a,
            points_against: self.points_for_b,
        }
    }

    /// Team B's view of this result.
    pub fn side_b(&self) -> SideView {
        SideView {
            won: self.winner_key == self.team_b_key,
            sets_won: self.sets_for_b,
            sets_lost: self.sets_for_a,
            points_for: self.points_for_b,
            points_against: self.points_for_a,
        }
    }

    /// The given team's view of this result, or None if the team did not
    /// play in it.
    pub fn side_for(&self, team_key: &str) -> Option<SideView> {
        if team_key == self.team_a_key {
            Some(self.side_a())
        } else if team_key == self.team_b_key {
            Some(self.side_b())
        } else {
            None
        }
    }

    pub fn loser_key(&self) -> &str {
        if self.winner_key == self.team_a_key {
            &self.team_b_key
        } else {
            &self.team_a_key
        }
    }
}

// Free functions (generic) for result operations

/// Append a result row to the ledger.
pub async fn create_result(
    txn: &DatabaseTransaction,
    dto: results_adapter::ResultCreate,
) -> Result<MatchResult, DomainError> {
    let result = results_adapter::insert(txn, dto).await?;
    Ok(MatchResult::from(result))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    result_id: i64,
) -> Result<Option<MatchResult>, DomainError> {
    let result = results_adapter::find_by_id(conn, result_id).await?;
    Ok(result.map(MatchResult::from))
}

/// Find result by id or return error if not found.
pub async fn require_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    result_id: i64,
) -> Result<MatchResult, DomainError> {
    find_by_id(conn, result_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Result,
            format!("Match result {result_id} not found"),
        )
    })
}

/// Full ledger, oldest first.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<MatchResult>, DomainError> {
    let results = results_adapter::find_all(conn).await?;
    Ok(results.into_iter().map(MatchResult::from).collect())
}

/// Every result a team played on either side, oldest first.
pub async fn find_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_key: &str,
) -> Result<Vec<MatchResult>, DomainError> {
    let results = results_adapter::find_by_team(conn, team_key).await?;
    Ok(results.into_iter().map(MatchResult::from).collect())
}

/// Most recent results, newest first (game-history views).
pub async fn find_recent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<MatchResult>, DomainError> {
    let results = results_adapter::find_recent(conn, limit).await?;
    Ok(results.into_iter().map(MatchResult::from).collect())
}

/// Timestamp of the most recent result a team contributed to, if any.
pub async fn latest_recorded_at<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_key: &str,
) -> Result<Option<OffsetDateTime>, DomainError> {
    Ok(results_adapter::latest_recorded_at_for_team(conn, team_key).await?)
}

/// Delete one result row. Returns true if a row was deleted.
pub async fn delete_by_id(
    txn: &DatabaseTransaction,
    result_id: i64,
) -> Result<bool, DomainError> {
    let rows = results_adapter::delete_by_id(txn, result_id).await?;
    Ok(rows > 0)
}

/// Delete every result referencing a team. Returns rows deleted.
pub async fn delete_by_team(
    txn: &DatabaseTransaction,
    team_key: &str,
) -> Result<u64, DomainError> {
    Ok(results_adapter::delete_by_team(txn, team_key).await?)
}

// Conversions between SeaORM models and domain models

impl From<match_results::Model> for MatchResult {
    fn from(model: match_results::Model) -> Self {
        Self {
            result_id: model.result_id,
            team_a_key: model.team_a_key,
            team_b_key: model.team_b_key,
            sets_for_a: model.sets_for_a,
            sets_for_b: model.sets_for_b,
            points_for_a: model.points_for_a,
            points_for_b: model.points_for_b,
            winner_key: model.winner_key,
            recorded_at: model.recorded_at,
            reported_by: model.reported_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::MatchResult;

    fn result() -> MatchResult {
        MatchResult {
            result_id: 1,
            team_a_key: "role:a".into(),
            team_b_key: "role:b".into(),
            sets_for_a: 3,
            sets_for_b: 1,
            points_for_a: 75,
            points_for_b: 60,
            winner_key: "role:a".into(),
            recorded_at: OffsetDateTime::UNIX_EPOCH,
            reported_by: None,
        }
    }

    #[test]
    fn side_for_attributes_each_side() {
        let r = result();

        let a = r.side_for("role:a").unwrap();
        assert!(a.won);
        assert_eq!((a.sets_won, a.sets_lost), (3, 1));
        assert_eq!((a.points_for, a.points_against), (75, 60));

        let b = r.side_for("role:b").unwrap();
        assert!(!b.won);
        assert_eq!((b.sets_won, b.sets_lost), (1, 3));
        assert_eq!((b.points_for, b.points_against), (60, 75));
    }

    #[test]
    fn side_for_unknown_team_is_none() {
        assert!(result().side_for("role:c").is_none());
    }

    #[test]
    fn loser_key_is_other_side() {
        assert_eq!(result().loser_key(), "role:b");
    }
}
