//! Reconcile the standings table against the membership source.
//!
//! Team rosters live in the host platform and can change underneath us;
//! this service makes the standings table track them: add newly created
//! teams, drop deleted teams (cascading to their ledger rows), refresh the
//! denormalized display metadata for everyone else.

use std::collections::{BTreeMap, BTreeSet};

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use crate::domain::tally::SideView;
use crate::errors::domain::DomainError;
use crate::membership::{MembershipSource, TeamInfo};
use crate::repos::{results, standings};

/// Outcome counts of one reconcile pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileSummary {
    /// Teams created because the roster reports them and we did not.
    pub added: usize,
    /// Teams deleted (with their ledger rows) because the roster dropped them.
    pub removed: usize,
    /// Teams present on both sides whose display metadata was refreshed.
    pub synced: usize,
}

/// Reconciliation domain service.
pub struct ReconcileService;

impl ReconcileService {
    pub fn new() -> Self {
        Self
    }

    /// Align the standings table with a roster snapshot.
    ///
    /// Idempotent: a second pass over the same snapshot adds and removes
    /// nothing.
    pub async fn reconcile(
        &self,
        txn: &DatabaseTransaction,
        roster: &[TeamInfo],
    ) -> Result<ReconcileSummary, DomainError> {
        let existing: BTreeMap<String, standings::TeamStanding> = standings::find_all(txn)
            .await?
            .into_iter()
            .map(|s| (s.team_key.clone(), s))
            .collect();
        let roster_keys: BTreeSet<&str> = roster.iter().map(|t| t.team_key.as_str()).collect();

        let mut summary = ReconcileSummary::default();

        for team in roster {
            match existing.get(&team.team_key) {
                None => {
                    standings::create_zeroed(
                        txn,
                        &team.team_key,
                        &team.display_name,
                        team.display_emoji.as_deref(),
                    )
                    .await?;
                    debug!(team = %team.team_key, "reconcile added team");
                    summary.added += 1;
                }
                Some(standing) => {
                    // Display metadata is not authoritative locally
                    if standing.display_name != team.display_name
                        || standing.display_emoji != team.display_emoji
                    {
                        standings::update_display(
                            txn,
                            &team.team_key,
                            &team.display_name,
                            team.display_emoji.as_deref(),
                        )
                        .await?;
                    }
                    summary.synced += 1;
                }
            }
        }

        let removed_keys: BTreeSet<&str> = existing
            .keys()
            .map(String::as_str)
            .filter(|k| !roster_keys.contains(k))
            .collect();

        // Deleting a team's ledger rows un-counts those games; reverse them
        // out of the surviving opponents so the fold invariant still holds.
        let mut survivor_reversals: BTreeMap<String, Vec<SideView>> = BTreeMap::new();

        for team_key in &removed_keys {
            for result in results::find_by_team(txn, team_key).await? {
                let (opponent, side) = if result.team_a_key == *team_key {
                    (&result.team_b_key, result.side_b())
                } else {
                    (&result.team_a_key, result.side_a())
                };
                if !removed_keys.contains(opponent.as_str()) {
                    survivor_reversals
                        .entry(opponent.clone())
                        .or_default()
                        .push(side);
                }
            }

            let cascaded = results::delete_by_team(txn, team_key).await?;
            standings::delete_by_key(txn, team_key).await?;
            debug!(team = %team_key, cascaded_results = cascaded, "reconcile removed team");
            summary.removed += 1;
        }

        for (team_key, sides) in &survivor_reversals {
            let Some(standing) = existing.get(team_key) else {
                continue;
            };
            let mut tally = standing.tally();
            for side in sides {
                tally.retract(side);
            }
            let last_match_at = results::latest_recorded_at(txn, team_key).await?;
            standings::update_aggregates(txn, team_key, &tally, last_match_at).await?;
        }

        info!(
            added = summary.added,
            removed = summary.removed,
            synced = summary.synced,
            "reconciled standings with membership source"
        );

        Ok(summary)
    }

    /// Reconcile against a live membership source, snapshotting its roster
    /// exactly once.
    pub async fn reconcile_with_source(
        &self,
        txn: &DatabaseTransaction,
        source: &dyn MembershipSource,
    ) -> Result<ReconcileSummary, DomainError> {
        let roster = source.list_teams().await?;
        self.reconcile(txn, &roster).await
    }
}

impl Default for ReconcileService {
    fn default() -> Self {
        Self::new()
    }
}
