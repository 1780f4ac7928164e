//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One pool owned by the repository; handlers never see it
//! - Transactions for multi-statement writes
//! - Create is two units of work; a failed option insert is undone by deleting the question

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, memory_pool};
pub use repos::SqliteQuestionRepo;
pub use schema::{ensure_schema, schema_exists};
