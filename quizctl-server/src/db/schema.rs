//! Schema bootstrap for the question tables
//!
//! No migration framework: the bundled script runs once when either table is
//! missing.

use sqlx::SqlitePool;

/// Tables, constraints and indexes for questions and options.
const SCHEMA_SQL: &str = include_str!("../../schema/questions.sql");

const REQUIRED_TABLES: [&str; 2] = ["questions", "options"];

/// Check whether both the `questions` and `options` tables exist.
pub async fn schema_exists(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN (?, ?)",
    )
    .bind(REQUIRED_TABLES[0])
    .bind(REQUIRED_TABLES[1])
    .fetch_one(pool)
    .await?;

    Ok(count == REQUIRED_TABLES.len() as i64)
}

/// Create the schema if it is not already there.
///
/// The whole script runs in one transaction.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if schema_exists(pool).await? {
        tracing::debug!("question schema already present");
        return Ok(());
    }

    tracing::info!("creating question schema");
    let mut tx = pool.begin().await?;
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!("question schema created");
    Ok(())
}
