//! Code-point cursor and the lexical helpers built on it.

use crate::error::{ParseError, ParseErrorKind};

/// Forward-only view over buffered code points.
///
/// `current` is always `input.get(pos)`; `None` means the input is exhausted.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a [char],
    pos: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Primes the cursor on the first code point.
    pub fn new(input: &'a [char]) -> Self {
        Self {
            input,
            pos: 0,
            current: input.first().copied(),
        }
    }

    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    /// Steps one code point forward. Once exhausted, stays exhausted.
    pub fn advance(&mut self) -> Option<char> {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
        self.current = self.input.get(self.pos).copied();
        self.current
    }

    pub fn expect_and_advance(&mut self, expected: char) -> Result<Option<char>, ParseError> {
        if self.current != Some(expected) {
            return Err(self.error(ParseErrorKind::UnexpectedCharacter { expected }));
        }
        Ok(self.advance())
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.current {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Builds an error pinned to the current position.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.pos, self.current, kind)
    }
}
