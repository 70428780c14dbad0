//! Interactive driver.
//!
//! Reads one line at a time, runs a fresh [`Lexer`] over it and prints every
//! token. Line numbers therefore restart at 1 for each input line.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::{
    display_error,
    errors::errors::Error,
    lexer::{
        lexer::{decode_bytes, Lexer},
        tokens::Token,
    },
};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub prompt: String,
    /// Report the first `Illegal` token of a line as an error and skip the rest of it.
    pub strict: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        ReplOptions {
            prompt: String::from(PROMPT),
            strict: false,
        }
    }
}

pub fn format_token(token: &Token) -> String {
    format!(
        "Type: {}, Literal: {}, Position: [line:{}, column:{}]",
        token.kind, token.value, token.position.line, token.position.column
    )
}

/// Runs the read-tokenize-print loop until `input` is exhausted.
pub fn start(
    mut input: impl BufRead,
    mut output: impl Write,
    options: &ReplOptions,
) -> Result<(), Error> {
    let mut line = Vec::new();

    loop {
        write!(output, "{}", options.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }

        let source = trim_line_end(&line);
        debug!(len = source.len(), "read line");

        for token in Lexer::from_bytes(source).take_while(|token| !token.is_eof()) {
            if options.strict && token.is_illegal() {
                warn!(position = %token.position, value = %token.value, "illegal token");
                let text = decode_bytes(source);
                display_error(&Error::illegal_token(&token), &text, &mut output)?;
                break;
            }

            writeln!(output, "{}", format_token(&token))?;
        }
    }
}

fn trim_line_end(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }

    line
}

/// Prints every token of `source`, the trailing `EOF` included.
pub fn dump(source: &[u8], mut output: impl Write) -> Result<(), Error> {
    for token in Lexer::from_bytes(source) {
        writeln!(output, "{}", format_token(&token))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{dump, start, ReplOptions};

    fn run(input: &str, options: &ReplOptions) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, options).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_repl_prints_tokens_per_line() {
        let output = run("let x = 5;\n", &ReplOptions::default());

        assert_eq!(
            output,
            ">> Type: LET, Literal: let, Position: [line:1, column:1]\n\
             Type: IDENT, Literal: x, Position: [line:1, column:5]\n\
             Type: =, Literal: =, Position: [line:1, column:7]\n\
             Type: INT, Literal: 5, Position: [line:1, column:9]\n\
             Type: ;, Literal: ;, Position: [line:1, column:10]\n\
             >> "
        );
    }

    #[test]
    fn test_repl_restarts_line_numbers() {
        let output = run("a\r\n  b\n", &ReplOptions::default());

        assert_eq!(
            output,
            ">> Type: IDENT, Literal: a, Position: [line:1, column:1]\n\
             >> Type: IDENT, Literal: b, Position: [line:1, column:3]\n\
             >> "
        );
    }

    #[test]
    fn test_repl_custom_prompt_and_empty_input() {
        let options = ReplOptions {
            prompt: String::from("toy> "),
            strict: false,
        };

        assert_eq!(run("", &options), "toy> ");
        assert_eq!(run("\n", &options), "toy> toy> ");
    }

    #[test]
    fn test_repl_lenient_prints_illegal() {
        let output = run("a # b\n", &ReplOptions::default());

        assert!(output.contains("Type: ILLEGAL, Literal: #, Position: [line:1, column:3]"));
        assert!(output.contains("Type: IDENT, Literal: b, Position: [line:1, column:5]"));
    }

    #[test]
    fn test_repl_strict_reports_illegal_and_continues() {
        let options = ReplOptions {
            strict: true,
            ..ReplOptions::default()
        };
        let output = run("a # b\nc\n", &options);

        assert!(output.contains("Type: IDENT, Literal: a, Position: [line:1, column:1]"));
        assert!(output.contains("Error: IllegalToken"));
        assert!(output.contains("1 | a # b\n"));
        assert!(output.contains("  | --^\n"));
        assert!(!output.contains("Literal: b"));
        assert!(output.contains("Type: IDENT, Literal: c, Position: [line:1, column:1]"));
    }

    #[test]
    fn test_repl_tokenizes_non_utf8_lines() {
        let mut output = Vec::new();
        start(&b"a\xff b\nc\n"[..], &mut output, &ReplOptions::default()).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Type: ILLEGAL, Literal: \u{FF}, Position: [line:1, column:2]"));
        assert!(output.contains("Type: IDENT, Literal: b, Position: [line:1, column:4]"));
        assert!(output.contains("Type: IDENT, Literal: c, Position: [line:1, column:1]"));
    }

    #[test]
    fn test_repl_strict_non_utf8_caret() {
        let options = ReplOptions {
            strict: true,
            ..ReplOptions::default()
        };
        let mut output = Vec::new();
        start(&b"ab\xc3x\n"[..], &mut output, &options).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Error: IllegalToken"));
        assert!(output.contains("  | --^\n"));
    }

    #[test]
    fn test_dump_includes_eof() {
        let mut output = Vec::new();
        dump(b"x\n\ny", &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Type: IDENT, Literal: x, Position: [line:1, column:1]\n\
             Type: IDENT, Literal: y, Position: [line:3, column:1]\n\
             Type: EOF, Literal: , Position: [line:3, column:2]\n"
        );
    }
}
