//! Runs raw SQL against PostgreSQL, one connection per call.

use crate::error::ExecError;
use crate::service::rows::{row_to_array, Rows};
use async_trait::async_trait;
use sqlx::{Connection, Executor, PgConnection};
use std::time::Instant;

/// Executes a SQL string verbatim and returns the rows in array mode.
///
/// Multi-statement text yields the rows of every statement concatenated in order; nothing
/// marks where one statement's rows end, and rows may differ in width.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute(&self, database_url: &str, sql: &str) -> Result<Rows, ExecError>;
}

/// Production executor. Opens a fresh connection for every call and closes it afterwards;
/// nothing is pooled or reused between requests.
#[derive(Clone, Debug, Default)]
pub struct PgExecutor;

#[async_trait]
impl SqlExecutor for PgExecutor {
    async fn execute(&self, database_url: &str, sql: &str) -> Result<Rows, ExecError> {
        let started = Instant::now();
        let mut conn = PgConnection::connect(database_url)
            .await
            .map_err(ExecError::Connect)?;

        tracing::debug!(sql = %sql, "executing");
        // Simple query protocol: accepts multi-statement text, no parameters.
        let result = conn.fetch_all(sqlx::raw_sql(sql)).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "closing connection failed");
        }

        let rows = result.map_err(ExecError::Query)?;
        let rows: Rows = rows.iter().map(row_to_array).collect();
        tracing::info!(
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sql executed"
        );
        Ok(rows)
    }
}
