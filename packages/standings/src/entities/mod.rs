//! SeaORM entity definitions for the standings schema.

pub mod match_results;
pub mod team_standings;
