#![allow(dead_code)] // each test binary uses a subset of these helpers

pub mod factory;

use standings::{bootstrap_schema, connect_sqlite_memory, AppError, AppState};

/// Build an isolated test state: a private in-memory SQLite database with
/// the schema migrated up.
pub async fn build_test_state() -> Result<AppState, AppError> {
    standings_test_support::logging::init();

    let conn = connect_sqlite_memory().await?;
    bootstrap_schema(&conn).await?;
    Ok(AppState::new(conn))
}
