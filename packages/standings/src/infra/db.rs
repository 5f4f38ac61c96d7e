use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Unified database connector that supports different profiles and owners.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;

    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}

/// Connect to a fresh in-memory SQLite database.
///
/// Each call gets its own private database; used by the test suites and
/// never by production code paths.
pub async fn connect_sqlite_memory() -> Result<DatabaseConnection, AppError> {
    // One pooled connection only: every connection to ":memory:" is a
    // distinct database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Bring the schema up to date on an existing connection.
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> Result<(), AppError> {
    migration::migrate(conn, migration::MigrationCommand::Up).await?;
    Ok(())
}
