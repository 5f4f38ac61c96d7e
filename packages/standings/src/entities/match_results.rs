use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_results")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "result_id")]
    pub result_id: i64,
    #[sea_orm(column_name = "team_a_key")]
    pub team_a_key: String,
    #[sea_orm(column_name = "team_b_key")]
    pub team_b_key: String,
    #[sea_orm(column_name = "sets_for_a")]
    pub sets_for_a: i16,
    #[sea_orm(column_name = "sets_for_b")]
    pub sets_for_b: i16,
    #[sea_orm(column_name = "points_for_a")]
    pub points_for_a: i32,
    #[sea_orm(column_name = "points_for_b")]
    pub points_for_b: i32,
    #[sea_orm(column_name = "winner_key")]
    pub winner_key: String,
    #[sea_orm(column_name = "recorded_at")]
    pub recorded_at: OffsetDateTime,
    #[sea_orm(column_name = "reported_by")]
    pub reported_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
