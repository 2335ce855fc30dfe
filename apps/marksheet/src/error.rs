//! Error types for the shell and the session runner.

use thiserror::Error;

/// A command line that could not be turned into an action.
///
/// These are reported to the user and the session carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command `{0}` (type `help` for a list)")]
    UnknownCommand(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid argument for `{command}`: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },

    #[error("row {row} is not in the current view ({visible} rows shown)")]
    RowOutOfRange { row: usize, visible: usize },
}

/// Failures that end the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read script {path}: {source}")]
    Script {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
