//! Store backend over the plain-text HTTP query interface

use crate::error::{DbError, DbResult};
use crate::traits::Store;
use async_trait::async_trait;
use mend_core::StoreConfig;

/// Longest statement prefix echoed into debug logs
const LOG_SQL_PREFIX: usize = 80;

/// Store reached through `POST http://<host>:<port>/?database=<db>`
///
/// Statements travel as the request body; credentials as basic auth.
pub struct HttpStore {
    client: reqwest::Client,
    endpoint: String,
    database: String,
    user: String,
    password: String,
}

impl HttpStore {
    /// Build a client for the configured store
    pub fn new(config: &StoreConfig) -> DbResult<Self> {
        Self::with_endpoint(config.base_url(), config)
    }

    /// Build a client for an explicit endpoint, taking credentials and
    /// timeouts from `config`
    pub fn with_endpoint(endpoint: impl Into<String>, config: &StoreConfig) -> DbResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            database: config.database.clone(),
            user: config.user.clone(),
            password: config.password.clone(),
        })
    }

    /// Endpoint URL, without the `database` parameter
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, sql: &str) -> DbResult<String> {
        log::debug!("POST {} :: {}", self.endpoint, sql_preview(sql));

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("database", self.database.as_str())])
            .basic_auth(&self.user, Some(&self.password))
            .body(sql.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(DbError::QueryFailed {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl Store for HttpStore {
    async fn execute(&self, sql: &str) -> DbResult<()> {
        self.post(sql).await.map(|_| ())
    }

    async fn query_scalar(&self, sql: &str) -> DbResult<String> {
        let body = self.post(sql).await?;
        Ok(body.trim().to_string())
    }

    fn store_type(&self) -> &'static str {
        "http"
    }
}

/// First line of `sql`, cut to [`LOG_SQL_PREFIX`] characters
fn sql_preview(sql: &str) -> String {
    let first_line = sql.trim().lines().next().unwrap_or_default();
    if first_line.chars().count() > LOG_SQL_PREFIX {
        let cut: String = first_line.chars().take(LOG_SQL_PREFIX).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
