//! Lox command-line driver.
//!
//! Ties the phases together: `lox_lexer` scans, `lox_parse` parses and
//! `lox_eval` interprets. The binary in `main.rs` is a thin wrapper around
//! [`config::RunConfig`] and [`commands::dispatch`]; embedders and tests use
//! [`run_source`] directly.

pub mod commands;
pub mod config;
mod pipeline;
mod tracing_setup;

pub use config::{exit_code, Command, ConfigError, RunConfig, USAGE};
pub use pipeline::{execute, front_end, run_source, FrontEnd, RunOutcome};
pub use tracing_setup::init_tracing;
