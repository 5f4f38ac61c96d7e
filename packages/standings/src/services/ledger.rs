//! Record and retract match results.
//!
//! Both operations are read-modify-write against the two affected standings
//! rows and must run inside one transaction (`db::txn::with_txn`). The
//! standings reads lock their rows, so concurrent reports touching the
//! same team serialize instead of clobbering each other's counters.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use crate::adapters::results_sea::ResultCreate;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::results::{self, MatchResult};
use crate::repos::standings::{self, TeamStanding};

/// A team reference for result reporting: the key plus optional display
/// metadata used when the standing row has to be created lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub key: String,
    pub display_name: Option<String>,
    pub display_emoji: Option<String>,
}

impl TeamRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: None,
            display_emoji: None,
        }
    }

    pub fn with_display(mut self, name: impl Into<String>, emoji: Option<String>) -> Self {
        self.display_name = Some(name.into());
        self.display_emoji = emoji;
        self
    }
}

/// Input for recording one game.
#[derive(Debug, Clone)]
pub struct NewResult {
    pub team_a: TeamRef,
    pub team_b: TeamRef,
    pub sets_a: i16,
    pub sets_b: i16,
    pub points_a: i32,
    pub points_b: i32,
    pub reported_by: Option<String>,
}

impl NewResult {
    fn validate(&self) -> Result<(), DomainError> {
        if self.team_a.key == self.team_b.key {
            return Err(DomainError::validation(
                ValidationKind::SameTeam,
                format!("A team cannot play itself: '{}'", self.team_a.key),
            ));
        }
        if self.sets_a < 0 || self.sets_b < 0 {
            return Err(DomainError::validation(
                ValidationKind::NegativeSets,
                format!("Set counts must be non-negative: {}-{}", self.sets_a, self.sets_b),
            ));
        }
        if self.sets_a == self.sets_b {
            return Err(DomainError::validation(
                ValidationKind::TiedSets,
                format!("Tied set counts are not supported: {}-{}", self.sets_a, self.sets_b),
            ));
        }
        Ok(())
    }
}

/// Ledger domain service.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Record a game result: append it to the ledger and fold it into both
    /// teams' standings. Returns the inserted result, including the
    /// database-assigned id used for retraction.
    pub async fn record_result(
        &self,
        txn: &DatabaseTransaction,
        new: NewResult,
    ) -> Result<MatchResult, DomainError> {
        new.validate()?;

        // Standing rows must exist before the aggregate update. Rows are
        // locked in key order so two concurrent reports cannot deadlock.
        let (standing_a, standing_b) = if new.team_a.key <= new.team_b.key {
            let a = ensure_standing(txn, &new.team_a).await?;
            let b = ensure_standing(txn, &new.team_b).await?;
            (a, b)
        } else {
            let b = ensure_standing(txn, &new.team_b).await?;
            let a = ensure_standing(txn, &new.team_a).await?;
            (a, b)
        };

        let winner_key = if new.sets_a > new.sets_b {
            new.team_a.key.clone()
        } else {
            new.team_b.key.clone()
        };
        let recorded_at = time::OffsetDateTime::now_utc();

        let result = results::create_result(
            txn,
            ResultCreate {
                team_a_key: new.team_a.key.clone(),
                team_b_key: new.team_b.key.clone(),
                sets_for_a: new.sets_a,
                sets_for_b: new.sets_b,
                points_for_a: new.points_a,
                points_for_b: new.points_b,
                winner_key,
                recorded_at,
                reported_by: new.reported_by,
            },
        )
        .await?;

        for (standing, side) in [(&standing_a, result.side_a()), (&standing_b, result.side_b())] {
            let mut tally = standing.tally();
            tally.apply(&side);
            standings::update_aggregates(txn, &standing.team_key, &tally, Some(recorded_at))
                .await?;
        }

        info!(
            result_id = result.result_id,
            team_a = %result.team_a_key,
            team_b = %result.team_b_key,
            sets = %format!("{}-{}", result.sets_for_a, result.sets_for_b),
            winner = %result.winner_key,
            "recorded match result"
        );

        Ok(result)
    }

    /// Retract a previously recorded result: reverse its contribution to
    /// both standings rows and delete the ledger entry.
    pub async fn retract_result(
        &self,
        txn: &DatabaseTransaction,
        result_id: i64,
    ) -> Result<(), DomainError> {
        let result = results::require_result(txn, result_id).await?;

        results::delete_by_id(txn, result_id).await?;

        // Same lock order as record_result
        let mut sides = [
            (&result.team_a_key, result.side_a()),
            (&result.team_b_key, result.side_b()),
        ];
        sides.sort_by(|x, y| x.0.cmp(y.0));

        for (team_key, side) in sides {
            let Some(standing) = standings::find_by_key_for_update(txn, team_key).await? else {
                // Standing already removed by reconcile; nothing to reverse
                debug!(team = %team_key, result_id, "retract skipped missing standing");
                continue;
            };
            let mut tally = standing.tally();
            tally.retract(&side);
            // last_match_at falls back to the newest surviving result
            let last_match_at = results::latest_recorded_at(txn, team_key).await?;
            standings::update_aggregates(txn, team_key, &tally, last_match_at).await?;
        }

        info!(
            result_id,
            team_a = %result.team_a_key,
            team_b = %result.team_b_key,
            "retracted match result"
        );

        Ok(())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a standing row, creating it zeroed when the team has never been
/// seen before. Placeholder display values are used if the caller supplied
/// no metadata.
async fn ensure_standing(
    txn: &DatabaseTransaction,
    team: &TeamRef,
) -> Result<TeamStanding, DomainError> {
    if let Some(existing) = standings::find_by_key_for_update(txn, &team.key).await? {
        return Ok(existing);
    }

    let fallback_name = format!("Team {}", team.key);
    let display_name = team.display_name.as_deref().unwrap_or(&fallback_name);
    debug!(team = %team.key, "lazily creating standing row");
    standings::create_zeroed(txn, &team.key, display_name, team.display_emoji.as_deref()).await
}
