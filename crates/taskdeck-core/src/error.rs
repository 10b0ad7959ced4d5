//! Error types.
//!
//! The taxonomy is deliberately small: validation failure on `create` (or an
//! update candidate) is the only domain error. Update/delete on an unknown id
//! is a no-op surfaced as [`crate::store::Applied::NotFound`], not an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field of the task entity that validation can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Code,
    AssignDate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Code => "code",
            Field::AssignDate => "assignDate",
        };
        f.write_str(s)
    }
}

/// One violated rule: field plus human-readable message, ready for inline
/// display next to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation failure for a candidate: at least one [`FieldError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Messages for one field, in rule order.
    pub fn messages_for(&self, field: Field) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum TaskDeckError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_for_filters_by_field() {
        let err = ValidationError::new(vec![
            FieldError::new(Field::Code, "Code is required"),
            FieldError::new(Field::Name, "Name is required"),
        ]);

        assert_eq!(err.messages_for(Field::Name), vec!["Name is required"]);
        assert_eq!(err.messages_for(Field::AssignDate), Vec::<&str>::new());
    }

    #[test]
    fn field_error_display_is_field_colon_message() {
        let e = FieldError::new(Field::Code, "Invalid pattern");
        assert_eq!(e.to_string(), "code: Invalid pattern");
    }

    #[test]
    fn validation_error_converts_into_taskdeck_error() {
        let err = ValidationError::new(vec![FieldError::new(Field::Name, "Name is required")]);
        let top: TaskDeckError = err.into();
        let TaskDeckError::Validation(inner) = top;
        assert_eq!(inner.errors.len(), 1);
    }
}
