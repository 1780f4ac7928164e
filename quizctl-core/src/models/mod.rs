//! Domain models with their invariant checks
//!
//! Checks run before any write. Invalid input returns ValidationError, not panic.

pub mod option;
pub mod pagination;
pub mod question;
pub mod validation;

pub use option::QuestionOption;
pub use pagination::{Page, PageParams};
pub use question::Question;
pub use validation::{validate_option, validate_question, ValidationError};
