//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Transactions for every multi-statement write
//! - Store failures carry the name of the failing step

pub mod questions;

pub use questions::SqliteQuestionRepo;

use quizctl_core::Error;

/// Attach the name of the failing store step to a sqlx result.
pub(crate) trait StoreContext<T> {
    fn during(self, op: &'static str) -> Result<T, Error>;
}

impl<T> StoreContext<T> for Result<T, sqlx::Error> {
    fn during(self, op: &'static str) -> Result<T, Error> {
        self.map_err(|e| Error::persistence(op, e))
    }
}
