//! # Configuration
//!
//! Command-line flags and the session settings derived from them.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Interactive student record sheet.
///
/// Reads one command per line. Type `help` inside the session for the list
/// of commands.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Render `show` as JSON instead of a text table
    #[arg(long)]
    pub json: bool,

    /// Suppress the prompt and the automatic table after each change
    #[arg(short, long)]
    pub quiet: bool,

    /// Tracing filter (overrides RUST_LOG), e.g. `info` or `marksheet=debug`
    #[arg(long)]
    pub log_level: Option<String>,
}

/// How `show` renders the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one shell session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub script: Option<PathBuf>,
    pub format: OutputFormat,
    pub quiet: bool,
    pub log_level: Option<String>,
}

impl SessionConfig {
    /// Whether to print a prompt before each line.
    #[must_use]
    pub fn shows_prompt(&self) -> bool {
        !self.quiet && self.script.is_none()
    }

    /// Whether mutations are followed by a refreshed table.
    #[must_use]
    pub fn echoes_view(&self) -> bool {
        !self.quiet
    }
}

impl From<Cli> for SessionConfig {
    fn from(cli: Cli) -> Self {
        Self {
            script: cli.script,
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            quiet: cli.quiet,
            log_level: cli.log_level,
        }
    }
}

/// Build the tracing filter: `--log-level`, then `RUST_LOG`, then the default.
#[must_use]
pub fn log_filter(config: &SessionConfig) -> EnvFilter {
    config
        .log_level
        .as_deref()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// the user-facing surface.
pub fn init_tracing(config: &SessionConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(log_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
