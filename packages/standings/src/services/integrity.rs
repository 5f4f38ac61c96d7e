//! Validate and repair standing aggregates against the ledger.
//!
//! The ledger is the source of truth for every counter; validate reports
//! where the stored aggregates disagree with the fold of the log, repair
//! rewrites them from that fold. Repair never reads the stored counters —
//! that is the whole point: it is the recovery path for when they are wrong.

use std::collections::{BTreeMap, BTreeSet};

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::tally::Tally;
use crate::errors::domain::DomainError;
use crate::membership::{MembershipSource, TeamInfo};
use crate::repos::results::{self, MatchResult};
use crate::repos::standings::{self, TeamStanding};
use crate::services::reconcile::{ReconcileService, ReconcileSummary};

/// Comparable snapshot of one standing's aggregate columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandingSnapshot {
    pub wins: i32,
    pub losses: i32,
    pub games_played: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
    pub points_for: i32,
    pub points_against: i32,
    pub win_percentage: f64,
    pub set_differential: i32,
}

impl StandingSnapshot {
    fn from_stored(standing: &TeamStanding) -> Self {
        Self {
            wins: standing.wins,
            losses: standing.losses,
            games_played: standing.games_played,
            sets_won: standing.sets_won,
            sets_lost: standing.sets_lost,
            points_for: standing.points_for,
            points_against: standing.points_against,
            win_percentage: standing.win_percentage,
            set_differential: standing.set_differential,
        }
    }

    fn from_tally(tally: &Tally) -> Self {
        Self {
            wins: tally.wins,
            losses: tally.losses,
            games_played: tally.games_played,
            sets_won: tally.sets_won,
            sets_lost: tally.sets_lost,
            points_for: tally.points_for,
            points_against: tally.points_against,
            win_percentage: tally.win_percentage(),
            set_differential: tally.set_differential(),
        }
    }
}

/// One team whose stored aggregates disagree with the ledger fold.
/// A finding, not a fault: validate collects all of these and keeps going.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discrepancy {
    pub team_key: String,
    pub stored: StandingSnapshot,
    pub recomputed: StandingSnapshot,
}

/// Everything validate found in one pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IntegrityReport {
    pub discrepancies: Vec<Discrepancy>,
    /// Roster teams with no standing row (only when a roster was supplied).
    pub missing_teams: Vec<String>,
    /// Standing rows the roster no longer reports (only when supplied).
    pub orphaned_teams: Vec<String>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty()
            && self.missing_teams.is_empty()
            && self.orphaned_teams.is_empty()
    }
}

/// Outcome of one repair pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepairSummary {
    /// Standing rows whose aggregates were rewritten.
    pub repaired: usize,
    /// Result of the follow-up reconcile, when a roster was supplied.
    pub reconcile: Option<ReconcileSummary>,
}

/// Integrity domain service.
pub struct IntegrityService;

impl IntegrityService {
    pub fn new() -> Self {
        Self
    }

    /// Recompute every team's fold from the ledger and diff it against the
    /// stored aggregates. Read-only.
    pub async fn validate<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        roster: Option<&[TeamInfo]>,
    ) -> Result<IntegrityReport, DomainError> {
        let all_standings = standings::find_all(conn).await?;
        let all_results = results::find_all(conn).await?;
        let folds = fold_ledger(&all_results);

        let mut report = IntegrityReport::default();

        for standing in &all_standings {
            let recomputed = folds
                .get(standing.team_key.as_str())
                .copied()
                .unwrap_or_default();
            let stored = StandingSnapshot::from_stored(standing);
            let expected = StandingSnapshot::from_tally(&recomputed);
            if stored != expected {
                warn!(team = %standing.team_key, "standing disagrees with ledger fold");
                report.discrepancies.push(Discrepancy {
                    team_key: standing.team_key.clone(),
                    stored,
                    recomputed: expected,
                });
            }
        }

        if let Some(roster) = roster {
            let standing_keys: BTreeSet<&str> =
                all_standings.iter().map(|s| s.team_key.as_str()).collect();
            let roster_keys: BTreeSet<&str> = roster.iter().map(|t| t.team_key.as_str()).collect();

            report.missing_teams = roster_keys
                .difference(&standing_keys)
                .map(|k| k.to_string())
                .collect();
            report.orphaned_teams = standing_keys
                .difference(&roster_keys)
                .map(|k| k.to_string())
                .collect();
        }

        info!(
            discrepancies = report.discrepancies.len(),
            missing = report.missing_teams.len(),
            orphaned = report.orphaned_teams.len(),
            "validated standings against ledger"
        );

        Ok(report)
    }

    /// Rewrite every standing's aggregates from the ledger fold, then
    /// reconcile against the roster when one is supplied.
    ///
    /// Recovery path for direct data edits or suspected bugs: the stored
    /// aggregates are never consulted, only overwritten.
    pub async fn repair(
        &self,
        txn: &DatabaseTransaction,
        roster: Option<&[TeamInfo]>,
    ) -> Result<RepairSummary, DomainError> {
        let mut summary = RepairSummary {
            repaired: self.rebuild_all(txn).await?,
            reconcile: None,
        };

        if let Some(roster) = roster {
            let reconcile = ReconcileService::new().reconcile(txn, roster).await?;
            if reconcile.added > 0 {
                // A directly-deleted standing row can leave ledger rows
                // behind; fold them into the freshly added teams too.
                for team in roster {
                    if self.rebuild_team(txn, &team.team_key).await? {
                        summary.repaired += 1;
                    }
                }
            }
            summary.reconcile = Some(reconcile);
        }

        info!(
            repaired = summary.repaired,
            reconciled = summary.reconcile.is_some(),
            "repaired standings from ledger"
        );

        Ok(summary)
    }

    /// Convenience wrapper that snapshots a live membership source once and
    /// repairs against it.
    pub async fn repair_with_source(
        &self,
        txn: &DatabaseTransaction,
        source: &dyn MembershipSource,
    ) -> Result<RepairSummary, DomainError> {
        let roster = source.list_teams().await?;
        self.repair(txn, Some(&roster)).await
    }

    async fn rebuild_all(&self, txn: &DatabaseTransaction) -> Result<usize, DomainError> {
        let all_standings = standings::find_all(txn).await?;
        let ledger = results::find_all(txn).await?;
        let folds = fold_ledger(&ledger);
        let last_played = last_played_per_team(&ledger);

        let mut repaired = 0;
        for standing in &all_standings {
            let tally = folds
                .get(standing.team_key.as_str())
                .copied()
                .unwrap_or_default();
            let last_match_at = last_played.get(standing.team_key.as_str()).copied();
            if write_if_changed(txn, standing, &tally, last_match_at).await? {
                repaired += 1;
            }
        }
        Ok(repaired)
    }

    async fn rebuild_team(
        &self,
        txn: &DatabaseTransaction,
        team_key: &str,
    ) -> Result<bool, DomainError> {
        let Some(standing) = standings::find_by_key(txn, team_key).await? else {
            return Ok(false);
        };
        let team_results = results::find_by_team(txn, team_key).await?;
        let sides: Vec<_> = team_results
            .iter()
            .filter_map(|r| r.side_for(team_key))
            .collect();
        let tally = Tally::fold(&sides);
        let last_match_at = team_results.iter().map(|r| r.recorded_at).max();
        write_if_changed(txn, &standing, &tally, last_match_at).await
    }
}

impl Default for IntegrityService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold the whole ledger into per-team tallies.
fn fold_ledger(ledger: &[MatchResult]) -> BTreeMap<&str, Tally> {
    let mut folds: BTreeMap<&str, Tally> = BTreeMap::new();
    for result in ledger {
        folds
            .entry(result.team_a_key.as_str())
            .or_default()
            .apply(&result.side_a());
        folds
            .entry(result.team_b_key.as_str())
            .or_default()
            .apply(&result.side_b());
    }
    folds
}

fn last_played_per_team(ledger: &[MatchResult]) -> BTreeMap<&str, time::OffsetDateTime> {
    let mut last: BTreeMap<&str, time::OffsetDateTime> = BTreeMap::new();
    for result in ledger {
        for key in [result.team_a_key.as_str(), result.team_b_key.as_str()] {
            last.entry(key)
                .and_modify(|t| *t = (*t).max(result.recorded_at))
                .or_insert(result.recorded_at);
        }
    }
    last
}

async fn write_if_changed(
    txn: &DatabaseTransaction,
    standing: &TeamStanding,
    tally: &Tally,
    last_match_at: Option<time::OffsetDateTime>,
) -> Result<bool, DomainError> {
    let unchanged = standing.tally() == *tally
        && standing.win_percentage == tally.win_percentage()
        && standing.set_differential == tally.set_differential()
        && standing.last_match_at == last_match_at;
    if unchanged {
        return Ok(false);
    }
    standings::update_aggregates(txn, &standing.team_key, tally, last_match_at).await?;
    Ok(true)
}
