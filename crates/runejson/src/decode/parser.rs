use std::collections::HashMap;
use std::io::Read;

use log::{debug, trace};

use crate::decode::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, Result};
use crate::number::NumberText;
use crate::options::Options;
use crate::value::Value;

/// Holds the fully buffered input. Each [`Parser::parse`] call scans it with
/// a fresh cursor, so one parser can be parsed repeatedly or shared.
#[derive(Debug, Clone)]
pub struct Parser {
    input: Vec<char>,
    options: Options,
}

impl Parser {
    /// Reads `reader` to the end and decodes it as UTF-8.
    pub fn new<R: Read>(reader: R) -> Result<Self> {
        Self::with_options(reader, Options::default())
    }

    pub fn with_options<R: Read>(mut reader: R, options: Options) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Ok(Self::from_text_with_options(&text, options))
    }

    pub fn from_text(input: &str) -> Self {
        Self::from_text_with_options(input, Options::default())
    }

    pub fn from_text_with_options(input: &str, options: Options) -> Self {
        Self {
            input: input.chars().collect(),
            options,
        }
    }

    /// Number of buffered code points.
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parses exactly one value, allowing surrounding whitespace only.
    pub fn parse(&self) -> core::result::Result<Value, ParseError> {
        debug!("parsing {} code points", self.input.len());
        let mut cur = Cursor::new(&self.input);
        let depth = Depth {
            level: 0,
            limit: self.options.max_depth,
        };
        let result = parse_document(&mut cur, depth);
        match &result {
            Ok(v) => debug!("parsed top-level {}", v.kind_name()),
            Err(e) => debug!("parse failed: {}", e),
        }
        result
    }
}

#[derive(Debug, Clone, Copy)]
struct Depth {
    level: usize,
    limit: usize,
}

impl Depth {
    fn enter(self, cur: &Cursor<'_>) -> core::result::Result<Depth, ParseError> {
        if self.level >= self.limit {
            return Err(cur.error(ParseErrorKind::DepthLimitExceeded { limit: self.limit }));
        }
        Ok(Depth {
            level: self.level + 1,
            limit: self.limit,
        })
    }
}

type ParseResult<T> = core::result::Result<T, ParseError>;

fn parse_document(cur: &mut Cursor<'_>, depth: Depth) -> ParseResult<Value> {
    let value = parse_value(cur, depth)?;
    cur.skip_whitespace();
    if !cur.is_exhausted() {
        return Err(cur.error(ParseErrorKind::TrailingContent));
    }
    Ok(value)
}

fn parse_value(cur: &mut Cursor<'_>, depth: Depth) -> ParseResult<Value> {
    cur.skip_whitespace();
    let Some(c) = cur.current() else {
        return Err(cur.error(ParseErrorKind::UnexpectedEndOfInput));
    };
    trace!("value at {}: {:?}", cur.position(), c);
    match c {
        '{' => {
            let inner = depth.enter(cur)?;
            parse_object(cur, inner)
        }
        '"' => parse_string(cur).map(Value::String),
        '[' => {
            let inner = depth.enter(cur)?;
            parse_array(cur, inner)
        }
        '0'..='9' | '-' => parse_number(cur),
        _ => parse_word(cur),
    }
}

fn object_error(cur: &Cursor<'_>, expected: &'static str) -> ParseError {
    cur.error(ParseErrorKind::MalformedObject { expected })
}

fn array_error(cur: &Cursor<'_>, expected: &'static str) -> ParseError {
    cur.error(ParseErrorKind::MalformedArray { expected })
}

fn parse_object(cur: &mut Cursor<'_>, depth: Depth) -> ParseResult<Value> {
    let mut map = HashMap::new();
    cur.expect_and_advance('{')?;
    cur.skip_whitespace();
    if cur.current() == Some('}') {
        cur.advance();
        return Ok(Value::Object(map));
    }
    loop {
        if cur.current() != Some('"') {
            return Err(object_error(cur, "'\"' to open a key"));
        }
        let key = parse_string(cur)?;
        cur.skip_whitespace();
        if cur.current() != Some(':') {
            return Err(object_error(cur, "':' after key"));
        }
        cur.advance();
        cur.skip_whitespace();
        if cur.is_exhausted() {
            return Err(object_error(cur, "a value after ':'"));
        }
        let value = parse_value(cur, depth)?;
        map.insert(key, value);
        cur.skip_whitespace();
        match cur.current() {
            Some('}') => {
                cur.advance();
                return Ok(Value::Object(map));
            }
            Some(',') => {
                cur.advance();
                cur.skip_whitespace();
            }
            _ => return Err(object_error(cur, "',' or '}'")),
        }
    }
}

fn parse_array(cur: &mut Cursor<'_>, depth: Depth) -> ParseResult<Value> {
    let mut items = Vec::new();
    cur.expect_and_advance('[')?;
    cur.skip_whitespace();
    if cur.current() == Some(']') {
        cur.advance();
        return Ok(Value::Array(items));
    }
    loop {
        if cur.is_exhausted() {
            return Err(array_error(cur, "a value or ']'"));
        }
        items.push(parse_value(cur, depth)?);
        cur.skip_whitespace();
        match cur.current() {
            Some(']') => {
                cur.advance();
                return Ok(Value::Array(items));
            }
            Some(',') => {
                cur.advance();
                cur.skip_whitespace();
            }
            _ => return Err(array_error(cur, "',' or ']'")),
        }
    }
}

fn parse_string(cur: &mut Cursor<'_>) -> ParseResult<String> {
    let mut out = String::new();
    cur.expect_and_advance('"')?;
    loop {
        match cur.current() {
            None => return Err(cur.error(ParseErrorKind::UnterminatedString)),
            Some('"') => {
                cur.advance();
                return Ok(out);
            }
            Some('\\') => return Err(cur.error(ParseErrorKind::UnsupportedEscape)),
            Some(c) => {
                out.push(c);
                cur.advance();
            }
        }
    }
}

fn push_digits(cur: &mut Cursor<'_>, out: &mut String) -> usize {
    let mut n = 0;
    while let Some(c) = cur.current().filter(char::is_ascii_digit) {
        out.push(c);
        cur.advance();
        n += 1;
    }
    n
}

fn parse_number(cur: &mut Cursor<'_>) -> ParseResult<Value> {
    let mut text = NumberText::default();
    if cur.current() == Some('-') {
        text.negative = true;
        cur.advance();
    }
    if push_digits(cur, &mut text.digits) == 0 {
        return Err(cur.error(ParseErrorKind::MalformedNumber));
    }
    if cur.current() == Some('.') {
        text.fractional = true;
        text.digits.push('.');
        cur.advance();
        if push_digits(cur, &mut text.digits) == 0 {
            return Err(cur.error(ParseErrorKind::MalformedNumber));
        }
    }
    if matches!(cur.current(), Some('e' | 'E')) {
        return Err(cur.error(ParseErrorKind::UnsupportedExponent));
    }
    text.into_value()
        .ok_or_else(|| cur.error(ParseErrorKind::MalformedNumber))
}

fn parse_word(cur: &mut Cursor<'_>) -> ParseResult<Value> {
    let (word, value) = match cur.current() {
        Some('t') => ("true", Value::Bool(true)),
        Some('f') => ("false", Value::Bool(false)),
        Some('n') => ("null", Value::Null),
        _ => return Err(cur.error(ParseErrorKind::UnrecognizedValue)),
    };
    for letter in word.chars() {
        cur.expect_and_advance(letter)?;
    }
    Ok(value)
}

/// Parses `input` with default options.
pub fn parse_to_value(input: &str) -> core::result::Result<Value, ParseError> {
    Parser::from_text(input).parse()
}
