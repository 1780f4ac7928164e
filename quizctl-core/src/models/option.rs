//! Answer option belonging to a question

use serde::{Deserialize, Serialize};

use super::validation::{validate_option, ValidationError};

/// One possible answer of a question.
///
/// `id`, `question_id` and `option_order` are assigned by the store and are
/// never read from request bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    #[serde(skip_deserializing, skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(skip_deserializing)]
    pub question_id: i64,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub correct: bool,
    #[serde(skip_deserializing)]
    pub option_order: i64,
}

fn is_unassigned(id: &i64) -> bool {
    *id == 0
}

impl QuestionOption {
    pub fn new(body: impl Into<String>, correct: bool) -> Self {
        Self {
            body: body.into(),
            correct,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_option(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_fields_are_ignored_on_input() {
        let option: QuestionOption = serde_json::from_value(json!({
            "id": 9,
            "questionId": -1,
            "body": "West",
            "correct": true,
            "optionOrder": 42
        }))
        .unwrap();

        assert_eq!(option, QuestionOption::new("West", true));
        assert_eq!(option.validate(), Ok(()));
    }

    #[test]
    fn unassigned_id_is_not_serialized() {
        let value = serde_json::to_value(QuestionOption::new("East", false)).unwrap();
        assert_eq!(
            value,
            json!({ "questionId": 0, "body": "East", "correct": false, "optionOrder": 0 })
        );
    }
}
