//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens. It handles:
//!
//! - Single and two character operators (`=`, `==`, `!`, `!=`, ...)
//! - Recognition of keywords, identifiers and integer literals
//! - Line and column tracking for every token
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
