//! quizctl-core: multiple-choice question model and service contract
//!
//! - [`models`]: `Question` / `QuestionOption` and their validation rules
//! - [`repo`]: the storage seam the service persists through
//! - [`service`]: validate-then-persist entry point used by transports
//! - [`memory`]: in-process repository with the same semantics as the SQL engine

pub mod error;
pub mod memory;
pub mod models;
pub mod repo;
pub mod service;

pub use error::{CompensationError, Error, Result};
pub use models::{Page, Question, QuestionOption, ValidationError};
pub use repo::QuestionRepository;
pub use service::QuestionService;
