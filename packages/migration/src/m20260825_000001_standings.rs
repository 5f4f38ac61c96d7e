use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum TeamStandings {
    Table,
    TeamKey,
    DisplayName,
    DisplayEmoji,
    Wins,
    Losses,
    GamesPlayed,
    SetsWon,
    SetsLost,
    PointsFor,
    PointsAgainst,
    WinPercentage,
    SetDifferential,
    LastMatchAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MatchResults {
    Table,
    ResultId,
    TeamAKey,
    TeamBKey,
    SetsForA,
    SetsForB,
    PointsForA,
    PointsForB,
    WinnerKey,
    RecordedAt,
    ReportedBy,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // team_standings
        manager
            .create_table(
                Table::create()
                    .table(TeamStandings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamStandings::TeamKey)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::DisplayName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeamStandings::DisplayEmoji).string().null())
                    .col(
                        ColumnDef::new(TeamStandings::Wins)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::Losses)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::GamesPlayed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::SetsWon)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::SetsLost)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::PointsFor)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::PointsAgainst)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::WinPercentage)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::SetDifferential)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::LastMatchAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeamStandings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // match_results
        manager
            .create_table(
                Table::create()
                    .table(MatchResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchResults::ResultId)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(MatchResults::TeamAKey).string().not_null())
                    .col(ColumnDef::new(MatchResults::TeamBKey).string().not_null())
                    .col(
                        ColumnDef::new(MatchResults::SetsForA)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchResults::SetsForB)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchResults::PointsForA)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MatchResults::PointsForB)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(MatchResults::WinnerKey).string().not_null())
                    .col(
                        ColumnDef::new(MatchResults::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchResults::ReportedBy).string().null())
                    .to_owned(),
            )
            .await?;

        // Reconcile deletes result rows by either side, so index both key columns
        manager
            .create_index(
                Index::create()
                    .name("idx_match_results_team_a")
                    .table(MatchResults::Table)
                    .col(MatchResults::TeamAKey)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_results_team_b")
                    .table(MatchResults::Table)
                    .col(MatchResults::TeamBKey)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_results_recorded_at")
                    .table(MatchResults::Table)
                    .col(MatchResults::RecordedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamStandings::Table).to_owned())
            .await?;
        Ok(())
    }
}
