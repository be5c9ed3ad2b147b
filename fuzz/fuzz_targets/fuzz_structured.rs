#![no_main]
use std::collections::HashMap;

use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;
use runejson::Value;

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

fn plain_string(u: &mut arbitrary::Unstructured) -> arbitrary::Result<String> {
    let s: String = u.arbitrary()?;
    Ok(s.chars().filter(|c| *c != '"' && *c != '\\').collect())
}

impl FuzzValue {
    /// Builds a value together with a text rendering of it.
    fn build(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<(Value, String)> {
        if depth >= MAX_DEPTH {
            return Ok((Value::Null, "null".into()));
        }

        Ok(match self.choice % 10 {
            0 => (Value::Null, "null".into()),
            1 => {
                let b: bool = u.arbitrary()?;
                (Value::Bool(b), b.to_string())
            }
            2 => {
                let n: i64 = u.arbitrary()?;
                let n = n.max(-i64::MAX);
                (Value::Integer(n), n.to_string())
            }
            3 => {
                let whole: u32 = u.arbitrary()?;
                let frac: u16 = u.arbitrary()?;
                let text = format!("{}.{}", whole, frac);
                let f: f64 = text.parse().unwrap();
                (Value::Float(f), text)
            }
            4 => {
                let s = plain_string(u)?;
                let text = format!("\"{}\"", s);
                (Value::String(s), text)
            }
            5..=7 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                let mut parts = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    let (v, t) = fv.build(u, depth + 1)?;
                    arr.push(v);
                    parts.push(t);
                }
                (Value::Array(arr), format!("[{}]", parts.join(" , ")))
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut obj = HashMap::new();
                let mut parts = Vec::with_capacity(size);
                for _ in 0..size {
                    let key = plain_string(u)?;
                    let fv: FuzzValue = u.arbitrary()?;
                    let (v, t) = fv.build(u, depth + 1)?;
                    parts.push(format!("\"{}\":\n{}", key, t));
                    obj.insert(key, v);
                }
                (Value::Object(obj), format!("{{ {} }}", parts.join(",")))
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok((expected, text)) = fv.build(&mut u, 0) {
            match runejson::parse_str(&text) {
                Ok(decoded) => {
                    if expected != decoded {
                        panic!(
                            "Structured mismatch!\nText: {}\nExpected: {:?}\nDecoded: {:?}",
                            text, expected, decoded
                        );
                    }
                }
                Err(e) => panic!("Structured parse failed: {}\nText: {}", e, text),
            }
        }
    }
});
