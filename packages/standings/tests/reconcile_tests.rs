//! Reconciliation against membership-source roster snapshots.

mod support;

use standings::repos::{results as results_repo, standings as standings_repo};
use standings::services::{IntegrityService, LedgerService, ReconcileService};
use standings::with_txn;
use standings::{AppError, MembershipSource, TeamInfo};

use crate::support::build_test_state;
use crate::support::factory::{result_between, standing, team};

#[tokio::test]
async fn test_adds_removes_and_syncs() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            // Existing teams: A (from a recorded game) and B
            LedgerService::new()
                .record_result(txn, result_between("role:a", "role:b", (3, 1), (75, 60)))
                .await?;

            // Roster: A stays, B is gone, D is new
            let roster = vec![team("role:a", "Aces"), team("role:d", "Dragons")];
            let summary = ReconcileService::new().reconcile(txn, &roster).await?;

            assert_eq!((summary.added, summary.removed, summary.synced), (1, 1, 1));

            let keys: Vec<String> = standings_repo::find_all(txn)
                .await?
                .into_iter()
                .map(|s| s.team_key)
                .collect();
            assert!(keys.contains(&"role:a".to_string()));
            assert!(keys.contains(&"role:d".to_string()));
            assert!(!keys.contains(&"role:b".to_string()));

            // New team starts zeroed
            let d = standing(txn, "role:d").await?;
            assert_eq!((d.wins, d.losses, d.games_played), (0, 0, 0));
            assert_eq!(d.display_name, "Dragons");

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_reconcile_is_idempotent() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let roster = vec![
                team("role:a", "Aces"),
                team("role:b", "Bears"),
                team("role:c", "Comets"),
            ];
            let service = ReconcileService::new();

            let first = service.reconcile(txn, &roster).await?;
            assert_eq!((first.added, first.removed, first.synced), (3, 0, 0));

            let second = service.reconcile(txn, &roster).await?;
            assert_eq!((second.added, second.removed, second.synced), (0, 0, 3));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_removed_team_cascades_to_its_results() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let ledger = LedgerService::new();

            // A beats C, A beats B; then C's role is deleted upstream
            ledger
                .record_result(txn, result_between("role:a", "role:c", (3, 0), (75, 30)))
                .await?;
            ledger
                .record_result(txn, result_between("role:a", "role:b", (3, 1), (75, 60)))
                .await?;

            let roster = vec![team("role:a", "Aces"), team("role:b", "Bears")];
            let summary = ReconcileService::new().reconcile(txn, &roster).await?;
            assert_eq!(summary.removed, 1);

            // C's standing and every result it played are gone
            assert!(standings_repo::find_by_key(txn, "role:c").await?.is_none());
            assert!(results_repo::find_by_team(txn, "role:c").await?.is_empty());

            // A's record now reflects only the surviving game
            let a = standing(txn, "role:a").await?;
            assert_eq!((a.wins, a.losses, a.games_played), (1, 0, 1));
            assert_eq!((a.sets_won, a.sets_lost), (3, 1));
            assert_eq!((a.points_for, a.points_against), (75, 60));

            // And the ledger fold agrees with every surviving standing
            let report = IntegrityService::new().validate(txn, Some(&roster)).await?;
            assert!(report.is_clean(), "unexpected findings: {report:?}");

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_display_metadata_is_refreshed() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let service = ReconcileService::new();

            service
                .reconcile(txn, &[team("role:a", "Aces")])
                .await?;

            // Renamed upstream, emoji added
            let renamed = vec![TeamInfo::new("role:a", "Ace Attackers").with_emoji("\u{26A1}")];
            let summary = service.reconcile(txn, &renamed).await?;
            assert_eq!(summary.synced, 1);

            let a = standing(txn, "role:a").await?;
            assert_eq!(a.display_name, "Ace Attackers");
            assert_eq!(a.display_emoji.as_deref(), Some("\u{26A1}"));

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_reconcile_with_source_snapshots_roster_once() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let source: Vec<TeamInfo> = vec![team("role:a", "Aces"), team("role:b", "Bears")];

            let summary = ReconcileService::new()
                .reconcile_with_source(txn, &source as &dyn MembershipSource)
                .await?;
            assert_eq!(summary.added, 2);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}
