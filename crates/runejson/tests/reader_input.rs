use std::io::{self, Read};

use runejson::{Error, Parser, Value, parse_reader};

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test_log::test]
fn parses_from_reader() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_reader(&b"  {\"a\": [true]}\n"[..])?;
    assert_eq!(v["a"][0], Value::Bool(true));
    Ok(())
}

#[test_log::test]
fn invalid_utf8_is_distinct_from_grammar_errors() {
    let err = Parser::new(&b"\"\xff\""[..]).unwrap_err();
    assert!(matches!(err, Error::Utf8(_)), "{:?}", err);
}

#[test_log::test]
fn read_failures_surface_as_io() {
    let err = Parser::new(FailingReader).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{:?}", err);
    assert!(err.to_string().contains("disk on fire"));
}

#[test_log::test]
fn parser_can_parse_repeatedly() -> Result<(), Box<dyn std::error::Error>> {
    let parser = Parser::from_text("[1, 2.5]");
    assert_eq!(parser.len(), 8);
    let first = parser.parse()?;
    let second = parser.parse()?;
    assert_eq!(first, second);
    Ok(())
}

#[test_log::test]
fn parsers_run_independently_across_threads() {
    let parser = Parser::from_text(r#"{"k": [1, {"n": null}]}"#);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| parser.parse())).collect();
        for h in handles {
            let v = h.join().expect("thread").expect("parse");
            assert!(v["k"][1]["n"].is_null());
        }
    });
}
