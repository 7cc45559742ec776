//! The presentation boundary.
//!
//! The view never talks to a widget toolkit; it drives an implementation of
//! [`Frontend`]. All methods return `anyhow::Result` so presentation I/O
//! failures surface at the caller instead of being swallowed.

use anyhow::Result;

use roster_core::DomainError;
use roster_editor::EditorDialog;
use roster_people::Roster;

/// What the user did with the modal editor form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSignal {
    /// The confirm control was activated with these raw field values.
    Confirm(roster_editor::FieldInput),
    /// The cancel control was activated; no mutation, no report.
    Cancel,
}

/// Severity of a blocking notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A blocking notification: title plus message body, dismissed by the user
/// before interaction resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Render a domain failure as the alert the user sees.
    pub fn from_domain(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(messages) => {
                Self::error("Invalid input", messages.join("\n"))
            }
            other => Self::error("Error", other.to_string()),
        }
    }
}

/// The external presentation collaborator.
///
/// One logical UI thread: every method blocks until the user acts.
pub trait Frontend {
    /// Render the ordered three-column table from the roster's current order.
    fn refresh(&mut self, roster: &Roster) -> Result<()>;

    /// Show the modal editor (prefilled in `Edit` mode) and block until the
    /// user confirms or cancels one round of input.
    fn present_editor(&mut self, dialog: &EditorDialog) -> Result<EditorSignal>;

    /// Show a blocking notification the user must dismiss.
    fn notify(&mut self, notice: &Notice) -> Result<()>;
}
