use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_standings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "team_key")]
    pub team_key: String,
    #[sea_orm(column_name = "display_name")]
    pub display_name: String,
    #[sea_orm(column_name = "display_emoji")]
    pub display_emoji: Option<String>,
    pub wins: i32,
    pub losses: i32,
    #[sea_orm(column_name = "games_played")]
    pub games_played: i32,
    #[sea_orm(column_name = "sets_won")]
    pub sets_won: i32,
    #[sea_orm(column_name = "sets_lost")]
    pub sets_lost: i32,
    #[sea_orm(column_name = "points_for")]
    pub points_for: i32,
    #[sea_orm(column_name = "points_against")]
    pub points_against: i32,
    #[sea_orm(column_name = "win_percentage")]
    pub win_percentage: f64,
    #[sea_orm(column_name = "set_differential")]
    pub set_differential: i32,
    #[sea_orm(column_name = "last_match_at")]
    pub last_match_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
