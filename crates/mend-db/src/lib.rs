//! mend-db - Store access layer for Mend
//!
//! This crate provides the `Store` trait and its implementation over the
//! store's plain-text HTTP query interface.

pub mod error;
pub mod http;
pub mod sql_utils;
pub mod traits;

pub use error::{DbError, DbResult};
pub use http::HttpStore;
pub use traits::Store;
