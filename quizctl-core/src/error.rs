//! Error types shared by the service and every repository implementation

use thiserror::Error;

use crate::models::ValidationError;

/// Boxed store-level failure (driver errors, poisoned state, ...).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input violated a question or option invariant. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A store step failed. `op` names the step, e.g. "insert option".
    #[error("unable to {op}: {source}")]
    Persistence {
        op: &'static str,
        #[source]
        source: BoxError,
    },

    /// An update targeted a question that does not exist.
    #[error("question {id} not found")]
    NotFound { id: i64 },

    /// Cleanup after a partial create failed; the store may hold an orphan.
    #[error(transparent)]
    Compensation(#[from] CompensationError),
}

impl Error {
    pub fn persistence(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Persistence {
            op,
            source: source.into(),
        }
    }
}

/// Both the option insert of a create and the compensating delete failed.
#[derive(Debug, Error)]
#[error(
    "unable to insert options for question {question_id} ({cause}) \
     and unable to delete the question afterwards ({cleanup})"
)]
pub struct CompensationError {
    /// Id of the question row that may have been left behind.
    pub question_id: i64,
    /// The option-insert failure that triggered the cleanup.
    pub cause: Box<Error>,
    /// The failure of the cleanup itself.
    pub cleanup: Box<Error>,
}
