//! Question and option invariants
//!
//! Each entity has an ordered list of named checks. The first failing check
//! wins, so callers always see the most fundamental problem.

use std::fmt;

use super::{Question, QuestionOption};

/// Minimum number of options a question must carry.
pub const MIN_OPTIONS: usize = 2;

/// Minimum question body length, in characters.
pub const MIN_QUESTION_BODY_LEN: usize = 10;

/// Minimum option body length, in characters.
pub const MIN_OPTION_BODY_LEN: usize = 1;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Question has fewer options than allowed
    TooFewOptions { min: usize, actual: usize },

    /// No option is flagged as correct
    NoCorrectOption,

    /// Text field is shorter than its minimum length
    TooShort { field: &'static str, min: usize },

    /// Numeric field is below zero
    Negative { field: &'static str },

    /// One of the question's options failed its own checks
    InvalidOption {
        index: usize,
        source: Box<ValidationError>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewOptions { min, actual } => {
                write!(f, "question should have at least {} options, got {}", min, actual)
            }
            Self::NoCorrectOption => write!(f, "there isn't a correct option in the list"),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters long", field, min)
            }
            Self::Negative { field } => write!(f, "{} must not be negative", field),
            Self::InvalidOption { index, source } => write!(f, "option {}: {}", index, source),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOption { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

type Check<T> = fn(&T) -> Result<(), ValidationError>;

const QUESTION_CHECKS: &[Check<Question>] = &[
    has_enough_options,
    has_correct_option,
    question_body_long_enough,
    options_well_formed,
];

const OPTION_CHECKS: &[Check<QuestionOption>] = &[
    option_body_long_enough,
    question_id_not_negative,
    option_order_not_negative,
];

/// Run every question check in order, stopping at the first failure.
pub fn validate_question(question: &Question) -> Result<(), ValidationError> {
    QUESTION_CHECKS.iter().try_for_each(|check| check(question))
}

/// Run the field checks of a single option.
pub fn validate_option(option: &QuestionOption) -> Result<(), ValidationError> {
    OPTION_CHECKS.iter().try_for_each(|check| check(option))
}

fn has_enough_options(q: &Question) -> Result<(), ValidationError> {
    if q.options.len() < MIN_OPTIONS {
        return Err(ValidationError::TooFewOptions {
            min: MIN_OPTIONS,
            actual: q.options.len(),
        });
    }
    Ok(())
}

fn has_correct_option(q: &Question) -> Result<(), ValidationError> {
    if q.correct_options().next().is_some() {
        Ok(())
    } else {
        Err(ValidationError::NoCorrectOption)
    }
}

fn question_body_long_enough(q: &Question) -> Result<(), ValidationError> {
    min_chars("question body", &q.body, MIN_QUESTION_BODY_LEN)
}

fn options_well_formed(q: &Question) -> Result<(), ValidationError> {
    q.options
        .iter()
        .enumerate()
        .try_for_each(|(index, option)| {
            validate_option(option).map_err(|e| ValidationError::InvalidOption {
                index,
                source: Box::new(e),
            })
        })
}

fn option_body_long_enough(o: &QuestionOption) -> Result<(), ValidationError> {
    min_chars("option body", &o.body, MIN_OPTION_BODY_LEN)
}

fn question_id_not_negative(o: &QuestionOption) -> Result<(), ValidationError> {
    if o.question_id < 0 {
        return Err(ValidationError::Negative { field: "questionId" });
    }
    Ok(())
}

fn option_order_not_negative(o: &QuestionOption) -> Result<(), ValidationError> {
    if o.option_order < 0 {
        return Err(ValidationError::Negative { field: "optionOrder" });
    }
    Ok(())
}

fn min_chars(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}
