//! Question aggregate

use serde::{Deserialize, Serialize};

use super::validation::{validate_question, ValidationError};
use super::QuestionOption;

/// A question together with the options it exclusively owns.
///
/// Option order is meaningful: position `i` is persisted as `optionOrder == i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(skip_deserializing)]
    pub id: i64,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn new(body: impl Into<String>, options: Vec<QuestionOption>) -> Self {
        Self {
            id: 0,
            body: body.into(),
            options,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_question(self)
    }

    /// Set the question id and renumber options the way the store persists them.
    ///
    /// Option ids are left untouched.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        for (position, option) in self.options.iter_mut().enumerate() {
            option.question_id = id;
            option.option_order = position as i64;
        }
        self
    }

    pub fn correct_options(&self) -> impl Iterator<Item = &QuestionOption> {
        self.options.iter().filter(|o| o.correct)
    }
}
