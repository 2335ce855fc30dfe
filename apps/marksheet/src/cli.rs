//! # Session Runner
//!
//! Drives a [`Session`] from a reader (stdin or a script file) to a writer.

use crate::config::SessionConfig;
use crate::error::{CliError, CliResult};
use crate::shell::{Flow, Session};
use marksheet_core::AppState;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::info;

const PROMPT: &str = "marksheet> ";

/// Feed every line of `input` to a new session until EOF or `quit`.
///
/// Returns the final state so callers can inspect what the session built.
pub fn run_session<R: BufRead, W: Write>(
    config: SessionConfig,
    input: R,
    out: &mut W,
) -> CliResult<AppState> {
    let mut session = Session::new(config);
    let prompt = session.config().shows_prompt();

    if prompt {
        writeln!(out, "Student Record sheet. Type `help` for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            // Close the prompt line left open by EOF.
            if prompt {
                writeln!(out)?;
            }
            break;
        };
        if session.handle_line(&line?, out)? == Flow::Quit {
            break;
        }
    }

    let state = session.state().clone();
    info!(records = state.store().len(), "session ended");
    Ok(state)
}

/// Run the commands in a script file.
pub fn run_script<W: Write>(config: SessionConfig, path: &Path, out: &mut W) -> CliResult<AppState> {
    let file = File::open(path).map_err(|source| CliError::Script {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "running script");
    run_session(config, BufReader::new(file), out)
}

/// Entry point used by the binary: script file if configured, else stdin.
pub fn run(config: SessionConfig) -> CliResult<AppState> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.script.clone() {
        Some(path) => run_script(config, &path, &mut out),
        None => run_session(config, io::stdin().lock(), &mut out),
    }
}
