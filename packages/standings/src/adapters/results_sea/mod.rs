//! SeaORM adapter for the match-result ledger.

use sea_orm::sea_query::Condition;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::match_results;

pub mod dto;

pub use dto::ResultCreate;

fn either_side(team_key: &str) -> Condition {
    Condition::any()
        .add(match_results::Column::TeamAKey.eq(team_key))
        .add(match_results::Column::TeamBKey.eq(team_key))
}

/// Append a result row. The id is assigned by the database.
pub async fn insert(
    txn: &DatabaseTransaction,
    dto: ResultCreate,
) -> Result<match_results::Model, sea_orm::DbErr> {
    let result = match_results::ActiveModel {
        result_id: sea_orm::NotSet,
        team_a_key: Set(dto.team_a_key),
        team_b_key: Set(dto.team_b_key),
        sets_for_a: Set(dto.sets_for_a),
        sets_for_b: Set(dto.sets_for_b),
        points_for_a: Set(dto.points_for_a),
        points_for_b: Set(dto.points_for_b),
        winner_key: Set(dto.winner_key),
        recorded_at: Set(dto.recorded_at),
        reported_by: Set(dto.reported_by),
    };

    result.insert(txn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    result_id: i64,
) -> Result<Option<match_results::Model>, sea_orm::DbErr> {
    match_results::Entity::find_by_id(result_id).one(conn).await
}

/// Full ledger, oldest first. Used by validate/repair folds.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<match_results::Model>, sea_orm::DbErr> {
    match_results::Entity::find()
        .order_by(match_results::Column::ResultId, Order::Asc)
        .all(conn)
        .await
}

/// Every result a team played on either side, oldest first.
pub async fn find_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_key: &str,
) -> Result<Vec<match_results::Model>, sea_orm::DbErr> {
    match_results::Entity::find()
        .filter(either_side(team_key))
        .order_by(match_results::Column::ResultId, Order::Asc)
        .all(conn)
        .await
}

/// Most recent results, newest first (game-history views).
pub async fn find_recent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<match_results::Model>, sea_orm::DbErr> {
    match_results::Entity::find()
        .order_by(match_results::Column::RecordedAt, Order::Desc)
        .order_by(match_results::Column::ResultId, Order::Desc)
        .limit(limit)
        .all(conn)
        .await
}

/// Timestamp of the most recent result a team contributed to, if any.
pub async fn latest_recorded_at_for_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_key: &str,
) -> Result<Option<OffsetDateTime>, sea_orm::DbErr> {
    let latest = match_results::Entity::find()
        .filter(either_side(team_key))
        .order_by(match_results::Column::RecordedAt, Order::Desc)
        .order_by(match_results::Column::ResultId, Order::Desc)
        .one(conn)
        .await?;
    Ok(latest.map(|r| r.recorded_at))
}

/// Delete one result row. Returns the number of rows affected.
pub async fn delete_by_id(
    txn: &DatabaseTransaction,
    result_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = match_results::Entity::delete_by_id(result_id)
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}

/// Delete every result referencing a team on either side.
/// Returns the number of rows affected.
pub async fn delete_by_team(
    txn: &DatabaseTransaction,
    team_key: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = match_results::Entity::delete_many()
        .filter(either_side(team_key))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}
