//! SeaORM adapter for the standings repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    Order, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::team_standings;

pub mod dto;

pub use dto::{AggregateUpdate, StandingCreate};

pub async fn find_by_key<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_key: &str,
) -> Result<Option<team_standings::Model>, sea_orm::DbErr> {
    team_standings::Entity::find_by_id(team_key.to_string())
        .one(conn)
        .await
}

/// Find a standing and lock its row for the rest of the transaction.
///
/// Renders `FOR UPDATE` on Postgres so a concurrent read-modify-write on
/// the same team blocks until this transaction finishes; SQLite has a
/// single writer and renders no lock clause.
pub async fn find_by_key_for_update(
    txn: &DatabaseTransaction,
    team_key: &str,
) -> Result<Option<team_standings::Model>, sea_orm::DbErr> {
    team_standings::Entity::find_by_id(team_key.to_string())
        .lock_exclusive()
        .one(txn)
        .await
}

/// All standings, unordered (reconcile/validate iterate the full table).
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<team_standings::Model>, sea_orm::DbErr> {
    team_standings::Entity::find().all(conn).await
}

/// All standings in leaderboard order: win percentage, then set
/// differential, then wins, with team_key as a stable tiebreak.
pub async fn find_all_ranked<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<team_standings::Model>, sea_orm::DbErr> {
    team_standings::Entity::find()
        .order_by(team_standings::Column::WinPercentage, Order::Desc)
        .order_by(team_standings::Column::SetDifferential, Order::Desc)
        .order_by(team_standings::Column::Wins, Order::Desc)
        .order_by(team_standings::Column::TeamKey, Order::Asc)
        .all(conn)
        .await
}

/// Insert a zeroed standing row.
pub async fn insert_zeroed(
    txn: &DatabaseTransaction,
    dto: StandingCreate,
) -> Result<team_standings::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let standing = team_standings::ActiveModel {
        team_key: Set(dto.team_key),
        display_name: Set(dto.display_name),
        display_emoji: Set(dto.display_emoji),
        wins: Set(0),
        losses: Set(0),
        games_played: Set(0),
        sets_won: Set(0),
        sets_lost: Set(0),
        points_for: Set(0),
        points_against: Set(0),
        win_percentage: Set(0.0),
        set_differential: Set(0),
        last_match_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    standing.insert(txn).await
}

/// Overwrite a standing's aggregate columns.
pub async fn update_aggregates(
    txn: &DatabaseTransaction,
    team_key: &str,
    dto: AggregateUpdate,
) -> Result<team_standings::Model, sea_orm::DbErr> {
    let standing = team_standings::ActiveModel {
        team_key: Set(team_key.to_string()),
        display_name: NotSet,
        display_emoji: NotSet,
        wins: Set(dto.wins),
        losses: Set(dto.losses),
        games_played: Set(dto.games_played),
        sets_won: Set(dto.sets_won),
        sets_lost: Set(dto.sets_lost),
        points_for: Set(dto.points_for),
        points_against: Set(dto.points_against),
        win_percentage: Set(dto.win_percentage),
        set_differential: Set(dto.set_differential),
        last_match_at: Set(dto.last_match_at),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    standing.update(txn).await
}

/// Refresh the denormalized display columns from the membership source.
pub async fn update_display(
    txn: &DatabaseTransaction,
    team_key: &str,
    display_name: &str,
    display_emoji: Option<&str>,
) -> Result<team_standings::Model, sea_orm::DbErr> {
    let standing = team_standings::ActiveModel {
        team_key: Set(team_key.to_string()),
        display_name: Set(display_name.to_string()),
        display_emoji: Set(display_emoji.map(|s| s.to_string())),
        wins: NotSet,
        losses: NotSet,
        games_played: NotSet,
        sets_won: NotSet,
        sets_lost: NotSet,
        points_for: NotSet,
        points_against: NotSet,
        win_percentage: NotSet,
        set_differential: NotSet,
        last_match_at: NotSet,
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    standing.update(txn).await
}

/// Delete a standing row. Returns the number of rows affected.
pub async fn delete_by_key(
    txn: &DatabaseTransaction,
    team_key: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = team_standings::Entity::delete_many()
        .filter(team_standings::Column::TeamKey.eq(team_key))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}
