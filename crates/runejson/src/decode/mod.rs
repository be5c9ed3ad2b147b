//! Decoding pipeline: code-point cursor and recursive-descent scanners

pub mod cursor;
pub mod parser;
