// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests, organized by phase.
//!
//! - `scan` - token streams from `lox_lexer`
//! - `parse` - syntax trees and error recovery from `lox_parse`
//! - `eval` - whole programs run through `loxc::run_source`
//! - `repl` - line-at-a-time sessions
//! - `common` - shared helpers
//!
//! ```bash
//! cargo test -p loxc --test phases
//! cargo test -p loxc --test phases eval
//! ```

mod phases {
    mod common;
    mod eval;
    mod parse;
    mod repl;
    mod scan;
}
