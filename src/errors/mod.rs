//! Error types for the lexer driver.
//!
//! The lexer itself never fails; these errors are produced by callers that
//! decide an `Illegal` token is fatal, or by I/O around the REPL.

pub mod errors;
