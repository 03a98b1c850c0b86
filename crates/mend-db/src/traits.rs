//! Store trait definition

use crate::error::{DbError, DbResult};
use crate::sql_utils::table_exists_sql;
use async_trait::async_trait;

/// Query access to the target store
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Store: Send + Sync {
    /// Execute a statement and discard any response body
    async fn execute(&self, sql: &str) -> DbResult<()>;

    /// Execute a query and return its trimmed response body
    async fn query_scalar(&self, sql: &str) -> DbResult<String>;

    /// Store type identifier for logging
    fn store_type(&self) -> &'static str;

    /// Issue a trivial query; succeeds once the store accepts queries
    async fn ping(&self) -> DbResult<()> {
        self.execute("SELECT 1").await
    }

    /// Execute a query returning a single unsigned integer
    async fn query_count(&self, sql: &str) -> DbResult<u64> {
        let body = self.query_scalar(sql).await?;
        body.parse::<u64>().map_err(|_| {
            DbError::UnexpectedResponse(format!("expected an integer, got '{body}'"))
        })
    }

    /// Check whether `table` exists in the current database
    async fn table_exists(&self, table: &str) -> DbResult<bool> {
        Ok(self.query_count(&table_exists_sql(table)).await? > 0)
    }
}
