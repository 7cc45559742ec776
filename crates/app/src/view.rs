//! The main/list view: roster ownership, selection, command handlers.

use anyhow::Result;

use roster_core::DomainError;
use roster_editor::EditorDialog;
use roster_people::{Person, Roster};

use crate::frontend::{EditorSignal, Frontend, Notice};

/// The main view behind the table.
///
/// Owns the authoritative roster and the current selection. The command
/// handlers take no framework event payload; the presentation collaborator
/// invokes them directly.
#[derive(Debug, Default)]
pub struct MainView {
    roster: Roster,
    selected: Option<usize>,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Select the row at `index`; an out-of-range index clears the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.roster.len()).then_some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Person> {
        self.selected.and_then(|index| self.roster.get(index))
    }

    /// Command handler: open the editor in add mode.
    pub fn add(&mut self, ui: &mut dyn Frontend) -> Result<()> {
        self.run_editor(EditorDialog::add(), ui)
    }

    /// Command handler: open the editor in edit mode for the selection.
    ///
    /// With nothing selected, reports the error and takes no further action.
    pub fn edit(&mut self, ui: &mut dyn Frontend) -> Result<()> {
        let Some(original) = self.selected().cloned() else {
            return self.report_no_selection("select a person to edit", ui);
        };
        self.run_editor(EditorDialog::edit(original), ui)
    }

    /// Command handler: remove the selection immediately (no confirmation
    /// prompt) and report success.
    pub fn delete(&mut self, ui: &mut dyn Frontend) -> Result<()> {
        let Some(person) = self.selected().cloned() else {
            return self.report_no_selection("select a person to delete", ui);
        };

        self.roster.remove(&person);
        self.clear_selection();
        tracing::info!(person = %person, "person removed");
        ui.refresh(&self.roster)?;
        ui.notify(&Notice::info("Deleted", "Person removed successfully."))
    }

    /// The modal loop: the main view is suspended until the dialog closes.
    ///
    /// A rejected submission keeps the dialog open for correction; success
    /// and cancel both close it.
    fn run_editor(&mut self, dialog: EditorDialog, ui: &mut dyn Frontend) -> Result<()> {
        loop {
            match ui.present_editor(&dialog)? {
                EditorSignal::Cancel => return Ok(()),
                EditorSignal::Confirm(input) => {
                    match dialog.submit(&input, &mut self.roster) {
                        Ok(_) => {
                            ui.refresh(&self.roster)?;
                            let message = match dialog.prefill() {
                                Some(_) => "Person updated successfully.",
                                None => "Person added successfully.",
                            };
                            return ui.notify(&Notice::info("Info", message));
                        }
                        Err(err) => {
                            let err = DomainError::from(err);
                            tracing::debug!(error = %err, "submission rejected");
                            ui.notify(&Notice::from_domain(&err))?;
                        }
                    }
                }
            }
        }
    }

    fn report_no_selection(&self, message: &str, ui: &mut dyn Frontend) -> Result<()> {
        let err = DomainError::no_selection(message);
        tracing::debug!(error = %err, "command ignored");
        ui.notify(&Notice::error("Error", message))
    }
}
