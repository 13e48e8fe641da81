//! Tracing subscriber setup for the CLI.
//!
//! Nothing is installed unless `LOX_LOG` (or `RUST_LOG`) is set, so normal
//! runs pay nothing for the instrumentation in the library crates.
//!
//! ```text
//! LOX_LOG=debug loxc run script.lox
//! LOX_LOG=lox_eval=trace,lox_parse=debug loxc run script.lox
//! ```

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Environment variables consulted for filter directives, in order.
const FILTER_VARS: [&str; 2] = ["LOX_LOG", "RUST_LOG"];

/// Initialize tracing. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = FILTER_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
        else {
            return;
        };

        let filter = match EnvFilter::try_new(&directives) {
            Ok(filter) => filter,
            Err(err) => {
                eprintln!("warning: ignoring invalid log filter '{directives}': {err}");
                return;
            }
        };

        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);

        // Fails only if another subscriber is already installed.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
