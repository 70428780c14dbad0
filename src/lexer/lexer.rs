use tracing::trace;

use crate::{Position, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Pull-based scanner over an immutable source buffer.
///
/// Each call to [`Lexer::next_token`] consumes exactly one token and leaves
/// the cursor on the first byte after it.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src [u8],
    /// Offset of `ch`
    pos: usize,
    /// Always `pos + 1`
    read_pos: usize,
    /// `None` once the cursor is past the end of the input
    ch: Option<u8>,
    line: u32,
    column: u32,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer::from_bytes(source.as_bytes())
    }

    /// Scans raw bytes. Anything outside ASCII comes back as `Illegal`, with
    /// the byte's Latin-1 character as its text.
    pub fn from_bytes(source: &'src [u8]) -> Lexer<'src> {
        let mut lexer = Lexer {
            source,
            pos: 0,
            read_pos: 0,
            ch: None,
            line: 1,
            // read_char below moves this to 1
            column: 0,
            finished: false,
        };

        lexer.read_char();
        lexer
    }

    /// Line and column of the byte under the cursor.
    pub fn current_position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Scans the next token.
    ///
    /// Never fails: unknown bytes come back as `Illegal` tokens. Once the
    /// input is exhausted every call returns `EOF` at the same position.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.current_position();

        let token = match self.ch {
            None => MK_TOKEN!(TokenKind::EOF, String::new(), position),
            Some(b'=') => self.read_operator(TokenKind::Assignment, TokenKind::Equals, position),
            Some(b'!') => self.read_operator(TokenKind::Not, TokenKind::NotEquals, position),
            Some(ch) if is_letter(ch) => self.read_identifier(position),
            Some(ch) if ch.is_ascii_digit() => self.read_number(position),
            Some(ch) => match TokenKind::from_symbol(ch) {
                Some(kind) => self.read_single(kind, position),
                None => self.read_single(TokenKind::Illegal, position),
            },
        };

        trace!(kind = %token.kind, value = %token.value, %position, "token");
        token
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        if self.ch == Some(b'\n') {
            self.line = self.line.saturating_add(1);
            self.column = 0;
        }

        self.ch = self.source.get(self.read_pos).copied();
        self.pos = self.read_pos;
        self.read_pos += 1;
        self.column = self.column.saturating_add(1);
    }

    fn peek_char(&self) -> Option<u8> {
        self.source.get(self.read_pos).copied()
    }

    /// Text of `source[start..self.pos]`, one char per byte.
    fn slice_from(&self, start: usize) -> String {
        decode_bytes(&self.source[start..self.pos])
    }

    fn read_single(&mut self, kind: TokenKind, position: Position) -> Token {
        let start = self.pos;
        self.read_char();

        MK_TOKEN!(kind, self.slice_from(start), position)
    }

    /// `single` on its own, `double` when followed by `=`.
    fn read_operator(&mut self, single: TokenKind, double: TokenKind, position: Position) -> Token {
        if self.peek_char() == Some(b'=') {
            let start = self.pos;
            self.read_char();
            self.read_char();

            return MK_TOKEN!(double, self.slice_from(start), position);
        }

        self.read_single(single, position)
    }

    fn read_identifier(&mut self, position: Position) -> Token {
        let start = self.pos;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }

        let value = self.slice_from(start);
        MK_TOKEN!(lookup_identifier(&value), value, position)
    }

    fn read_number(&mut self, position: Position) -> Token {
        let start = self.pos;
        while self.ch.is_some_and(|ch| ch.is_ascii_digit()) {
            self.read_char();
        }

        MK_TOKEN!(TokenKind::Integer, self.slice_from(start), position)
    }
}

#[cfg(test)]
impl Lexer<'_> {
    pub(super) fn set_column_for_test(&mut self, column: u32) {
        self.column = column;
    }
}

/// Yields every token up to and including the first `EOF`, then stops.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Maps every byte to the char with the same value, so token text keeps the
/// exact bytes it was scanned from.
pub fn decode_bytes(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Tokenizes the whole of `source`, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
