//! Lox CLI
//!
//! Tree-walking interpreter for Lox.

use loxc::commands::dispatch;
use loxc::{exit_code, init_tracing, RunConfig, USAGE};

fn main() {
    init_tracing();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(exit_code::USAGE);
        }
    };

    std::process::exit(dispatch(&config));
}
