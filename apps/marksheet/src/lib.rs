//! # Marksheet Library
//!
//! This library exposes the Marksheet modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod shell;

// Re-export marksheet_core for convenience
pub use marksheet_core;
