use serde::{Deserialize, Serialize};
use thiserror::Error;

use roster_core::DomainError;
use roster_people::{Person, Roster};

use crate::validate::{self, Violation};

/// Dialog mode, fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    Add,
    Edit,
}

/// Raw text captured from the three form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInput {
    pub name: String,
    pub surname: String,
    pub age: String,
}

impl FieldInput {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age: age.into(),
        }
    }
}

/// Why a submission was rejected. The dialog stays open in either case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Every violated field of the submission, in field order.
    #[error("invalid input")]
    Invalid(Vec<Violation>),

    /// Add-mode candidate equals an existing roster entry.
    #[error("a person with the same name and surname already exists")]
    Duplicate,
}

impl From<EditorError> for DomainError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::Invalid(violations) => {
                DomainError::validation(violations.iter().map(Violation::to_string))
            }
            EditorError::Duplicate => DomainError::duplicate(EditorError::Duplicate.to_string()),
        }
    }
}

/// The modal add/edit form, minus its rendering.
///
/// Holds the mode and, in `Edit` mode, the original record. One dialog value
/// drives one modal session; it is not re-entrant across modes.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorDialog {
    mode: EditorMode,
    original: Option<Person>,
}

impl EditorDialog {
    /// A dialog that confirms a create.
    pub fn add() -> Self {
        Self {
            mode: EditorMode::Add,
            original: None,
        }
    }

    /// A dialog pre-loaded with an existing record; confirms a replace.
    pub fn edit(original: Person) -> Self {
        Self {
            mode: EditorMode::Edit,
            original: Some(original),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// The record whose values prefill the form (`Edit` mode only).
    pub fn prefill(&self) -> Option<&Person> {
        self.original.as_ref()
    }

    /// Caption of the confirm control. The mode changes nothing else about
    /// the form's surface.
    pub fn confirm_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Add => "Add",
            EditorMode::Edit => "Save",
        }
    }

    /// The confirm action: validate, then apply the mutation.
    ///
    /// - Any field violation aborts with all violations collected; the
    ///   roster is untouched.
    /// - `Edit` mode replaces the original unconditionally, with no
    ///   duplicate re-check against other entries. A vanished original makes
    ///   the replace a no-op (the store logs it).
    /// - `Add` mode rejects a candidate equal to an existing entry, then
    ///   appends.
    ///
    /// Success returns the confirmed person; the caller closes the dialog.
    pub fn submit(&self, input: &FieldInput, roster: &mut Roster) -> Result<Person, EditorError> {
        let candidate = validate::validate(input).map_err(EditorError::Invalid)?;

        match &self.original {
            Some(original) => {
                let _ = roster.replace(original, candidate.clone());
                tracing::info!(person = %candidate, "person updated");
            }
            None => {
                if roster.contains(&candidate) {
                    return Err(EditorError::Duplicate);
                }
                roster.append(candidate.clone());
                tracing::info!(person = %candidate, "person added");
            }
        }

        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Person {
        Person::new("Ana", "Lopez", 30)
    }

    #[test]
    fn add_mode_appends_a_clean_submission() {
        let mut roster = Roster::new();
        let dialog = EditorDialog::add();

        let confirmed = dialog
            .submit(&FieldInput::new("Ana", "Lopez", "30"), &mut roster)
            .unwrap();

        assert_eq!(confirmed, ana());
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).map(Person::age), Some(30));
    }

    #[test]
    fn add_mode_rejects_a_duplicate_regardless_of_age() {
        let mut roster = Roster::new();
        roster.append(ana());
        let dialog = EditorDialog::add();

        let err = dialog
            .submit(&FieldInput::new("Ana", "Lopez", "45"), &mut roster)
            .unwrap_err();

        assert_eq!(err, EditorError::Duplicate);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).map(Person::age), Some(30));
    }

    #[test]
    fn invalid_submission_leaves_the_roster_untouched() {
        let mut roster = Roster::new();
        let dialog = EditorDialog::add();

        let err = dialog
            .submit(&FieldInput::new("", "", "abc"), &mut roster)
            .unwrap_err();

        match err {
            EditorError::Invalid(violations) => assert_eq!(violations.len(), 3),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert!(roster.is_empty());
    }

    #[test]
    fn edit_mode_replaces_the_original_in_place() {
        let mut roster = Roster::new();
        roster.append(ana());
        roster.append(Person::new("Luis", "Garcia", 22));

        let dialog = EditorDialog::edit(ana());
        let confirmed = dialog
            .submit(&FieldInput::new("Ana", "Lopez", "31"), &mut roster)
            .unwrap();

        assert_eq!(confirmed.age(), 31);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).map(Person::age), Some(31));
    }

    #[test]
    fn edit_mode_skips_the_duplicate_check() {
        // Editing Luis into "Ana Lopez" collides with the other entry; edit
        // mode applies the replace without re-checking, so both remain.
        let mut roster = Roster::new();
        roster.append(ana());
        let luis = Person::new("Luis", "Garcia", 22);
        roster.append(luis.clone());

        let dialog = EditorDialog::edit(luis);
        dialog
            .submit(&FieldInput::new("Ana", "Lopez", "22"), &mut roster)
            .unwrap();

        assert_eq!(roster.len(), 2);
        assert!(roster.iter().all(|p| p.name() == "Ana" && p.surname() == "Lopez"));
    }

    #[test]
    fn edit_of_a_vanished_original_mutates_nothing() {
        let mut roster = Roster::new();
        roster.append(Person::new("Luis", "Garcia", 22));

        // The original was deleted out from under the dialog.
        let dialog = EditorDialog::edit(ana());
        let confirmed = dialog
            .submit(&FieldInput::new("Ana", "Lopez", "31"), &mut roster)
            .unwrap();

        assert_eq!(confirmed.age(), 31);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).map(Person::name), Some("Luis"));
    }

    #[test]
    fn confirm_label_follows_the_mode() {
        assert_eq!(EditorDialog::add().confirm_label(), "Add");
        assert_eq!(EditorDialog::edit(ana()).confirm_label(), "Save");
        assert_eq!(EditorDialog::add().mode(), EditorMode::Add);
        assert!(EditorDialog::add().prefill().is_none());
        assert_eq!(EditorDialog::edit(ana()).prefill(), Some(&ana()));
    }

    #[test]
    fn editor_error_converts_into_the_domain_taxonomy() {
        let err: DomainError = EditorError::Invalid(vec![Violation::NameRequired]).into();
        assert_eq!(
            err,
            DomainError::validation(["the name field is required"])
        );

        let err: DomainError = EditorError::Duplicate.into();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }
}
