//! Error types for mend-db

use thiserror::Error;

/// Store operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Store connection failed: {0}")]
    ConnectionFailed(String),

    /// Query rejected by the store (D002)
    #[error("[D002] Query failed with HTTP {status}: {message}")]
    QueryFailed { status: u16, message: String },

    /// Response body could not be interpreted (D003)
    #[error("[D003] Unexpected store response: {0}")]
    UnexpectedResponse(String),

    /// Client could not be constructed (D004)
    #[error("[D004] Invalid store client configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<reqwest::Error> for DbError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest reports builder problems (bad URL) separately from
        // transport problems; everything else is treated as the store
        // being unreachable.
        if err.is_builder() {
            DbError::InvalidConfig(err.to_string())
        } else {
            DbError::ConnectionFailed(err.to_string())
        }
    }
}
