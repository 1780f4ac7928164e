//! quizctl-server: SQLite-backed question store with an HTTP API
//!
//! - [`db`]: connection pool, schema bootstrap, question repository
//! - [`http`]: axum router, error mapping, graceful shutdown

pub mod db;
pub mod http;

pub use db::{create_pool, ensure_schema, SqliteQuestionRepo};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
