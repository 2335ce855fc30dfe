//! # Marksheet
//!
//! Interactive student record sheet: enter names, ages and five marks,
//! see the percentage and division as you type, and keep a filterable
//! list of records for the session.

use clap::Parser;
use marksheet::cli;
use marksheet::config::{Cli, SessionConfig, init_tracing};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = SessionConfig::from(Cli::parse());
    init_tracing(&config);

    match cli::run(config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "session failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
