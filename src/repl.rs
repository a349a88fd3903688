use std::cell::RefCell;
use std::io::{BufRead, ErrorKind, Write};

use anyhow::{bail, Context};

use crate::catalog::Catalog;
use crate::render::{render_panel, render_table, Style};
use crate::session::{Action, Listing, Session};
use crate::sort::SortColumn;
use crate::state::FilterState;

pub const HELP: &str = r#"Available commands:
 - u | user <name>: show only products owned by the user with exactly this name.
 - all-users: stop filtering by owner.
 - s | search <text>: show only products whose name contains the text (case-insensitive).
 - clear-search: stop filtering by name.
 - c | category <title>: add the category to the selection, or remove it if already selected.
 - all-categories: stop filtering by category.
 - sort <id | product | category | user>: sort by the column; repeat to reverse, then to unsort.
 - r | reset: clear all filters.
 - p | panel: show the current filter selections.
 - h | help: show this help message.
 - q | quit: exit.
"#;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    ShowPanel,
    Help,
    Quit,
}

/// Parses one input line. Blank lines parse to `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (line.trim_end(), ""),
    };
    // the search text is kept as typed, other arguments are trimmed
    let arg = rest.trim();

    let command = match name {
        "u" | "user" => {
            if arg.is_empty() {
                bail!("Expected the name of a user");
            }
            Command::Apply(Action::SelectUser(arg.to_owned()))
        }
        "all-users" => Command::Apply(Action::SelectUser(String::new())),
        "s" | "search" => Command::Apply(Action::SetSearchQuery(
            rest.trim_end_matches(['\r', '\n']).to_owned(),
        )),
        "clear-search" => Command::Apply(Action::SetSearchQuery(String::new())),
        "c" | "category" => {
            if arg.is_empty() {
                bail!("Expected a category title");
            }
            Command::Apply(Action::ToggleCategory(arg.to_owned()))
        }
        "all-categories" => Command::Apply(Action::ClearCategories),
        "sort" => {
            let column = arg
                .parse::<SortColumn>()
                .with_context(|| format!("Unknown column {arg:?}"))?;
            Command::Apply(Action::ToggleSort(column))
        }
        "r" | "reset" => Command::Apply(Action::ResetAll),
        "p" | "panel" => Command::ShowPanel,
        "h" | "help" | "-h" | "--help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        unknown => bail!("Unrecognized command {unknown}"),
    };
    Ok(Some(command))
}

pub struct ReplOptions {
    pub style: Style,
    pub show_panel: bool,
    pub prompt: bool,
}

/// Reads commands until `quit` or end of input. Every action re-renders the listing to `output`.
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: R,
    mut output: W,
    options: &ReplOptions,
) -> anyhow::Result<()> {
    let rendered = RefCell::new(String::new());
    let render = |listing: &Listing<'_>, state: &FilterState| {
        let mut rendered = rendered.borrow_mut();
        if options.show_panel {
            rendered.push_str(&render_panel(catalog, state));
        }
        rendered.push_str(&render_table(listing, state, options.style));
    };

    let mut session = Session::new(catalog);
    render(&session.listing(), session.state());
    session.subscribe(render);

    let flush_rendered = |output: &mut W| -> anyhow::Result<()> {
        let text = std::mem::take(&mut *rendered.borrow_mut());
        output.write_all(text.as_bytes())?;
        Ok(())
    };
    flush_rendered(&mut output)?;

    let mut lines = input.lines();
    loop {
        if options.prompt {
            write!(output, "> ")?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            // the undecodable line is consumed, so the next one can still be read
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                log::debug!("Undecodable command line: {err}");
                writeln!(output, "Error: Command is not valid UTF-8\n")?;
                write!(output, "{HELP}")?;
                continue;
            }
            Err(err) => return Err(err).context("Reading command"),
        };

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Apply(action))) => {
                session.apply(action);
            }
            Ok(Some(Command::ShowPanel)) => {
                write!(output, "{}", render_panel(catalog, session.state()))?;
            }
            Ok(Some(Command::Help)) => write!(output, "{HELP}")?,
            Ok(Some(Command::Quit)) => break,
            Err(err) => {
                log::debug!("Bad command {line:?}: {err:?}");
                writeln!(output, "Error: {err:#}\n")?;
                write!(output, "{HELP}")?;
            }
        }
        flush_rendered(&mut output)?;
    }

    output.flush()?;
    Ok(())
}
