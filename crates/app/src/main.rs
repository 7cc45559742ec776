use std::io::{BufRead, Write};

use anyhow::Result;

use roster_app::{Frontend, MainView, TerminalFrontend};

const HELP: &str = "\
commands:
  list        show the table
  add         open the editor for a new person
  select N    select row N
  edit        edit the selected person
  delete      delete the selected person
  quit        exit (the roster is not persisted)";

fn main() -> Result<()> {
    roster_observability::init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(stdin.lock(), stdout.lock())
}

fn run(input: impl BufRead, output: impl Write) -> Result<()> {
    let mut ui = TerminalFrontend::new(input, output);
    let mut view = MainView::new();

    ui.refresh(view.roster())?;
    loop {
        let Some(line) = ui.read_command()? else {
            return Ok(());
        };
        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("list") => ui.refresh(view.roster())?,
            Some("add") => view.add(&mut ui)?,
            Some("edit") => view.edit(&mut ui)?,
            Some("delete") => view.delete(&mut ui)?,
            Some("select") => match words.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(index) => view.select(index),
                None => ui.print_line("usage: select N")?,
            },
            Some("quit") | Some("exit") => return Ok(()),
            Some("help") => ui.print_line(HELP)?,
            Some(other) => {
                tracing::debug!(command = other, "unknown command");
                ui.print_line("unknown command (try 'help')")?;
            }
        }
    }
}
