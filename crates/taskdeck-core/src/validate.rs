//! Field rules for task candidates.
//!
//! The store does not validate by itself: it delegates to this seam before
//! touching state. The default rules and messages match the create form:
//! - code: required, two letters followed by three digits
//! - name: required, at most 12 characters, at least one letter (ASCII Latin
//!   or the Turkish accented set)
//! - assign date: required (carried by the type; `NaiveDate` cannot be absent)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::TaskDraft;
use crate::error::{Field, FieldError, ValidationError};

/// Maximum accepted name length, in characters.
pub const NAME_MAX_CHARS: usize = 12;

/// Two letters, then three digits.
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}[0-9]{3}$").expect("code pattern compiles"));

/// Letters accepted by the name rule beyond ASCII.
const TURKISH_LETTERS: &str = "ığüşöçİĞÜŞÖÇ";

fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || TURKISH_LETTERS.contains(c)
}

/// Validator seam the store delegates candidate checking to.
///
/// The trait is the swap point for tests and alternate rule sets; the store
/// never hard-codes the rules.
pub trait Validate: Send + Sync {
    fn validate(&self, draft: &TaskDraft) -> Result<(), ValidationError>;
}

/// Default field rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct DraftValidator;

impl Validate for DraftValidator {
    fn validate(&self, draft: &TaskDraft) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if draft.code.is_empty() {
            errors.push(FieldError::new(Field::Code, "Code is required"));
        } else if !CODE_PATTERN.is_match(&draft.code) {
            errors.push(FieldError::new(Field::Code, "Invalid pattern"));
        }

        if draft.name.is_empty() {
            errors.push(FieldError::new(Field::Name, "Name is required"));
        } else {
            if !draft.name.chars().any(is_name_letter) {
                errors.push(FieldError::new(Field::Name, "Invalid pattern"));
            }
            if draft.name.chars().count() > NAME_MAX_CHARS {
                errors.push(FieldError::new(
                    Field::Name,
                    "Name must be exactly max 12 characters",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn draft(name: &str, code: &str) -> TaskDraft {
        TaskDraft::new(name, code, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[rstest]
    #[case::plain("Ayse", "AB123")]
    #[case::lowercase_code("Can", "cd456")]
    #[case::mixed_case_code("Can", "Cd456")]
    #[case::turkish_name("Ayşe", "AB123")]
    #[case::twelve_chars("AbcdefGhijkl", "ZZ999")]
    #[case::digits_and_letter("A1234", "AB123")]
    fn accepts_valid_candidates(#[case] name: &str, #[case] code: &str) {
        assert!(DraftValidator.validate(&draft(name, code)).is_ok());
    }

    #[rstest]
    #[case::empty_code("Ayse", "", "Code is required")]
    #[case::code_too_short("Ayse", "AB12", "Invalid pattern")]
    #[case::code_too_long("Ayse", "AB1234", "Invalid pattern")]
    #[case::code_digits_first("Ayse", "123AB", "Invalid pattern")]
    #[case::code_one_letter("Ayse", "A1234", "Invalid pattern")]
    fn rejects_bad_codes(#[case] name: &str, #[case] code: &str, #[case] message: &str) {
        let err = DraftValidator.validate(&draft(name, code)).unwrap_err();
        assert_eq!(err.messages_for(Field::Code), vec![message]);
        assert!(err.messages_for(Field::Name).is_empty());
    }

    #[rstest]
    #[case::empty_name("", "AB123", "Name is required")]
    #[case::no_letter("12345", "AB123", "Invalid pattern")]
    #[case::too_long("ThisNameIsWayTooLong", "AB123", "Name must be exactly max 12 characters")]
    fn rejects_bad_names(#[case] name: &str, #[case] code: &str, #[case] message: &str) {
        let err = DraftValidator.validate(&draft(name, code)).unwrap_err();
        assert_eq!(err.messages_for(Field::Name), vec![message]);
        assert!(err.messages_for(Field::Code).is_empty());
    }

    #[test]
    fn reports_every_violated_field_at_once() {
        let err = DraftValidator.validate(&draft("", "nope")).unwrap_err();
        assert_eq!(err.messages_for(Field::Code), vec!["Invalid pattern"]);
        assert_eq!(err.messages_for(Field::Name), vec!["Name is required"]);
        assert_eq!(err.errors.len(), 2);
    }

    #[test]
    fn long_name_without_letters_gets_both_name_messages() {
        let err = DraftValidator
            .validate(&draft("1234567890123", "AB123"))
            .unwrap_err();
        assert_eq!(
            err.messages_for(Field::Name),
            vec!["Invalid pattern", "Name must be exactly max 12 characters"]
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 12 Turkish letters is 12 characters even though it is more bytes.
        assert!(DraftValidator.validate(&draft("ığüşöçİĞÜŞÖÇ", "AB123")).is_ok());
    }
}
