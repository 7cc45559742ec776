//! Field validation for the editor form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use roster_people::Person;

use crate::dialog::FieldInput;

/// A single field-level violation.
///
/// `AgeRequired` and `AgeNotInteger` are mutually exclusive for one
/// submission: the format check only runs on non-empty age text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    #[error("the name field is required")]
    NameRequired,
    #[error("the surname field is required")]
    SurnameRequired,
    #[error("the age field is required")]
    AgeRequired,
    #[error("age must be an integer")]
    AgeNotInteger,
}

/// Validate raw form input, collecting every violation before reporting.
///
/// A clean submission yields the candidate `Person`. Leading/trailing
/// whitespace is not trimmed; only the truly empty string counts as missing.
pub fn validate(input: &FieldInput) -> Result<Person, Vec<Violation>> {
    let mut violations = Vec::new();

    if input.name.is_empty() {
        violations.push(Violation::NameRequired);
    }
    if input.surname.is_empty() {
        violations.push(Violation::SurnameRequired);
    }

    let age = if input.age.is_empty() {
        violations.push(Violation::AgeRequired);
        None
    } else {
        match input.age.parse::<u32>() {
            Ok(age) => Some(age),
            Err(_) => {
                violations.push(Violation::AgeNotInteger);
                None
            }
        }
    };

    if !violations.is_empty() {
        return Err(violations);
    }

    // All three checks passed, so age is present.
    let age = age.unwrap_or_default();
    Ok(Person::new(input.name.clone(), input.surname.clone(), age))
}
