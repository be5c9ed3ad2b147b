#![doc = include_str!("../README.md")]

pub mod decode;
pub mod error;
pub mod options;
pub mod value;

mod number;

pub use crate::decode::parser::Parser;
pub use crate::error::{Error, ParseError, ParseErrorKind, Result};
pub use crate::options::Options;
pub use crate::value::Value;

use std::io::Read;

#[cfg(feature = "json")]
use serde::de::DeserializeOwned;

pub fn parse_str(s: &str) -> Result<Value> {
    parse_str_with_options(s, &Options::default())
}

pub fn parse_str_with_options(s: &str, options: &Options) -> Result<Value> {
    let v = Parser::from_text_with_options(s, options.clone()).parse()?;
    Ok(v)
}

/// Buffers all of `reader` before parsing.
pub fn parse_reader<R: Read>(reader: R) -> Result<Value> {
    let v = Parser::new(reader)?.parse()?;
    Ok(v)
}

/// Parses `s`, then deserializes the tree into `T` through `serde_json`.
#[cfg(feature = "json")]
pub fn decode_from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    let v = parse_str_with_options(s, options)?;
    let t = serde_json::from_value(v.into())?;
    Ok(t)
}

#[cfg(feature = "json")]
pub fn decode_from_reader<R: Read, T: DeserializeOwned>(reader: R, options: &Options) -> Result<T> {
    let v = Parser::with_options(reader, options.clone())?.parse()?;
    let t = serde_json::from_value(v.into())?;
    Ok(t)
}
