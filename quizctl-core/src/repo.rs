//! Storage seam for question aggregates
//!
//! Implementations own their store handle exclusively. They receive questions
//! that already passed validation and are responsible for keeping a question
//! and its options consistent.

use async_trait::async_trait;

use crate::models::{Page, Question};
use crate::Result;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a new question with its options and return the assigned id.
    ///
    /// Option `questionId` / `optionOrder` are taken from the new id and the
    /// option's position; whatever the input carries is ignored. On error no
    /// question row may remain, unless the error is [`crate::Error::Compensation`].
    async fn create(&self, question: &Question) -> Result<i64>;

    /// Replace the body and the whole option set of `question.id` atomically.
    async fn update(&self, question: &Question) -> Result<()>;

    /// Remove a question and all of its options atomically.
    ///
    /// Removing an id that does not exist is not an error.
    async fn delete(&self, id: i64) -> Result<()>;

    /// List questions with their options ordered by `optionOrder`.
    ///
    /// With a cursor: at most `page.size` questions with `id < page.last_id`,
    /// newest first. Without one: every question, in no promised order.
    async fn list_all(&self, page: Page) -> Result<Vec<Question>>;
}
