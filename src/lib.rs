#![allow(clippy::module_inception)]

use std::{fmt::Display, io::Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod repl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Placeholder for errors with no source location.
    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `content`, without its terminator.
pub fn get_line_at_position(content: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    content
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


pub fn display_error(error: &Error, source: &str, out: &mut impl Write) -> std::io::Result<()> {
    /*
        Error: IllegalToken (...)
           |
         1 | let a = #;
           | --------^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return Ok(());
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .bytes()
        .take_while(|ch| *ch == b' ' || *ch == b'\t')
        .count();

    (&string[start..], start)
}
