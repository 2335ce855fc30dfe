//! # Shell
//!
//! Line-oriented front end over the form state machine.
//!
//! Each input line is parsed into a [`Command`], turned into a core
//! [`Action`] and applied. Row numbers typed by the user refer to the
//! filtered view currently on screen; they are resolved to store indices
//! before anything is edited or deleted.

use crate::config::{OutputFormat, SessionConfig};
use crate::error::{CliResult, ShellError};
use crate::render;
use marksheet_core::{Action, AppState, DivisionFilter, FormError, MARK_COUNT, Outcome};
use std::io::Write;
use tracing::{debug, info, warn};

pub const HELP: &str = "\
Commands:
  name <text>                     set the student name
  age <text>                      set the age
  mark <1-5> <text>               set one subject mark
  marks <m1> <m2> <m3> <m4> <m5>  set all five marks
  submit | update                 submit the form
  clear                           reset the form and stop editing
  edit <row>                      load a row of the table into the form
  delete <row>                    delete a row of the table
  search <text>                   filter rows by name (empty to clear)
  division <all|first|second|third|fail>
                                  filter rows by division
  show | list                     show the form and the table
  json                            print the current view as JSON
  help                            show this help
  quit | exit                     leave
";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Applies directly to the form.
    Form(Action),
    /// Edit the record shown at this 1-based row.
    Edit(usize),
    /// Delete the record shown at this 1-based row.
    Delete(usize),
    Show,
    Json,
    Help,
    Quit,
    /// Blank line or comment.
    Nothing,
}

/// Whether the session should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one line of input.
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Command::Nothing);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (trimmed, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "name" => Command::Form(Action::SetName(rest.to_string())),
        "age" => Command::Form(Action::SetAge(rest.to_string())),
        "mark" => parse_mark(rest)?,
        "marks" => parse_marks(rest)?,
        "submit" | "update" => Command::Form(Action::Submit),
        "clear" => Command::Form(Action::Clear),
        "edit" => Command::Edit(parse_row("edit", rest)?),
        "delete" => Command::Delete(parse_row("delete", rest)?),
        "search" => Command::Form(Action::SetNameFilter(rest.to_string())),
        "division" => parse_division(rest)?,
        "show" | "list" => Command::Show,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn parse_mark(rest: &str) -> Result<Command, ShellError> {
    let (subject, value) = match rest.split_once(char::is_whitespace) {
        Some((subject, value)) => (subject, value.trim()),
        None => (rest.trim(), ""),
    };
    if subject.is_empty() {
        return Err(ShellError::MissingArgument {
            command: "mark",
            expected: "a subject number from 1 to 5",
        });
    }
    let field = subject
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MARK_COUNT).contains(n))
        .ok_or_else(|| ShellError::InvalidArgument {
            command: "mark",
            reason: format!("subject must be 1-{MARK_COUNT}, got `{subject}`"),
        })?;
    Ok(Command::Form(Action::SetMark {
        field: field - 1,
        value: value.to_string(),
    }))
}

fn parse_marks(rest: &str) -> Result<Command, ShellError> {
    let values: Vec<&str> = rest.split_whitespace().collect();
    let marks: [String; MARK_COUNT] = values
        .iter()
        .map(|v| (*v).to_string())
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| ShellError::InvalidArgument {
            command: "marks",
            reason: format!("expected {MARK_COUNT} values, got {}", values.len()),
        })?;
    Ok(Command::Form(Action::SetMarks(marks)))
}

fn parse_row(command: &'static str, rest: &str) -> Result<usize, ShellError> {
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(ShellError::MissingArgument {
            command,
            expected: "a row number",
        });
    }
    arg.parse::<usize>()
        .ok()
        .filter(|row| *row >= 1)
        .ok_or_else(|| ShellError::InvalidArgument {
            command,
            reason: format!("`{arg}` is not a row number"),
        })
}

fn parse_division(rest: &str) -> Result<Command, ShellError> {
    if rest.trim().is_empty() {
        return Err(ShellError::MissingArgument {
            command: "division",
            expected: "all, first, second, third or fail",
        });
    }
    let selection = rest
        .parse::<DivisionFilter>()
        .map_err(|err| ShellError::InvalidArgument {
            command: "division",
            reason: err.to_string(),
        })?;
    Ok(Command::Form(Action::SetDivisionFilter(selection)))
}

// =============================================================================
// SESSION
// =============================================================================

/// A running shell session.
#[derive(Debug, Default)]
pub struct Session {
    state: AppState,
    config: SessionConfig,
}

impl Session {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: AppState::new(),
            config,
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handle one line of input, writing any response to `out`.
    ///
    /// Bad commands are reported to `out` and do not end the session; only
    /// output failures are returned as errors.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> CliResult<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "command rejected");
                writeln!(out, "Error: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "parsed command");

        match command {
            Command::Nothing => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => out.write_all(HELP.as_bytes())?,
            Command::Show => self.show(out)?,
            Command::Json => writeln!(out, "{}", render::render_json(&self.state)?)?,
            Command::Edit(row) => {
                if let Some(index) = self.resolve_row(row, out)? {
                    self.dispatch(Action::Edit(index), out)?;
                }
            }
            Command::Delete(row) => {
                if let Some(index) = self.resolve_row(row, out)? {
                    self.dispatch(Action::Delete(index), out)?;
                }
            }
            Command::Form(action) => self.dispatch(action, out)?,
        }
        Ok(Flow::Continue)
    }

    /// Print the form and the table in the configured format.
    pub fn show<W: Write>(&self, out: &mut W) -> CliResult<()> {
        match self.config.format {
            OutputFormat::Text => {
                write!(out, "{}", render::render_form(&self.state))?;
                writeln!(out)?;
                write!(out, "{}", render::render_table(&self.state))?;
            }
            OutputFormat::Json => writeln!(out, "{}", render::render_json(&self.state)?)?,
        }
        Ok(())
    }

    fn resolve_row<W: Write>(&self, row: usize, out: &mut W) -> CliResult<Option<usize>> {
        let index = row
            .checked_sub(1)
            .and_then(|position| self.state.row_index(position));
        if index.is_none() {
            let err = ShellError::RowOutOfRange {
                row,
                visible: self.state.visible_rows().len(),
            };
            warn!(%err, "row lookup failed");
            writeln!(out, "Error: {err}")?;
        }
        Ok(index)
    }

    fn dispatch<W: Write>(&mut self, action: Action, out: &mut W) -> CliResult<()> {
        let touches_marks = matches!(action, Action::SetMark { .. } | Action::SetMarks(_));
        let transition = std::mem::take(&mut self.state).apply(action);
        self.state = transition.state;

        match transition.outcome {
            Outcome::FieldUpdated => {
                if touches_marks && self.config.echoes_view() {
                    if let Some(line) = render::preview_line(self.state.preview()) {
                        writeln!(out, "{line}")?;
                    }
                }
            }
            Outcome::FilterUpdated => self.echo_table(out)?,
            Outcome::Added { index } => {
                info!(index, total = self.state.store().len(), "record added");
                writeln!(out, "Record added.")?;
                self.echo_table(out)?;
            }
            Outcome::Replaced { index } => {
                info!(index, "record replaced");
                writeln!(out, "Record updated.")?;
                self.echo_table(out)?;
            }
            Outcome::Removed { index } => {
                info!(index, total = self.state.store().len(), "record removed");
                writeln!(out, "Record deleted.")?;
                self.echo_table(out)?;
            }
            Outcome::EditStarted { index } => {
                info!(index, "editing record");
                writeln!(out, "Editing record. Change fields, then `update` or `clear`.")?;
                if self.config.echoes_view() {
                    write!(out, "{}", render::render_form(&self.state))?;
                }
            }
            Outcome::Cleared => writeln!(out, "Form cleared.")?,
            Outcome::Rejected(FormError::Validation(err)) => {
                debug!(%err, "submission failed validation");
                writeln!(out, "Error: {err}")?;
            }
            Outcome::Rejected(err) => {
                warn!(%err, "action rejected");
                writeln!(out, "Error: {err}")?;
            }
        }
        Ok(())
    }

    fn echo_table<W: Write>(&self, out: &mut W) -> CliResult<()> {
        if self.config.echoes_view() {
            write!(out, "{}", render::render_table(&self.state))?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
