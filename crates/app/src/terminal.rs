//! Line-oriented frontend over any reader/writer pair.
//!
//! Stands in for the widget toolkit: the table is printed as rows, the modal
//! editor is a sequence of prompts, and notifications are printed lines. The
//! generic reader/writer pair keeps the whole surface testable with
//! in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use roster_editor::{EditorDialog, FieldInput};
use roster_people::Roster;

use crate::frontend::{EditorSignal, Frontend, Notice, Severity};

/// Typing this at any editor prompt aborts the dialog.
const CANCEL_WORD: &str = "cancel";

pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, without the trailing newline. `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("reading from input")?;
        if bytes == 0 {
            return Ok(None);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prompt for the next command line. `None` on end of input.
    pub fn read_command(&mut self) -> Result<Option<String>> {
        write!(self.output, "> ").context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;
        self.read_line()
    }

    /// Print one plain line (command feedback, not a notification).
    pub fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("writing line")
    }

    /// Prompt for one field; `None` means the user cancelled (or input ended).
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ").context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;
        match self.read_line()? {
            Some(line) if line == CANCEL_WORD => Ok(None),
            Some(line) => Ok(Some(line)),
            None => Ok(None),
        }
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn refresh(&mut self, roster: &Roster) -> Result<()> {
        writeln!(self.output, "#  {:<15} {:<15} {:>3}", "Name", "Surname", "Age")?;
        for (index, person) in roster.iter().enumerate() {
            writeln!(
                self.output,
                "{index}  {:<15} {:<15} {:>3}",
                person.name(),
                person.surname(),
                person.age()
            )?;
        }
        if roster.is_empty() {
            writeln!(self.output, "(no entries)")?;
        }
        Ok(())
    }

    fn present_editor(&mut self, dialog: &EditorDialog) -> Result<EditorSignal> {
        match dialog.prefill() {
            Some(original) => writeln!(
                self.output,
                "-- Edit person: {original} (type '{CANCEL_WORD}' to abort) --"
            )?,
            None => writeln!(
                self.output,
                "-- New person (type '{CANCEL_WORD}' to abort) --"
            )?,
        }

        let Some(name) = self.prompt("Name")? else {
            return Ok(EditorSignal::Cancel);
        };
        let Some(surname) = self.prompt("Surname")? else {
            return Ok(EditorSignal::Cancel);
        };
        let Some(age) = self.prompt("Age")? else {
            return Ok(EditorSignal::Cancel);
        };

        writeln!(self.output, "[{}]", dialog.confirm_label())?;
        Ok(EditorSignal::Confirm(FieldInput::new(name, surname, age)))
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        let tag = match notice.severity {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        };
        writeln!(self.output, "[{tag}] {}: {}", notice.title, notice.message)?;
        Ok(())
    }
}
