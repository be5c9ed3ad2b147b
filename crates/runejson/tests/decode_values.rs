use runejson::{Value, parse_str};

#[test]
fn single_entry_object() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_str(r#"{"k":"v"}"#)?;
    let map = v.as_object().expect("object");
    assert_eq!(map.len(), 1);
    assert_eq!(map["k"], Value::String("v".into()));
    Ok(())
}

#[test]
fn empty_containers() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_str("{}")?.as_object().map(|m| m.len()), Some(0));
    assert_eq!(parse_str("[]")?, Value::Array(vec![]));
    assert_eq!(parse_str(" [ \n ] ")?, Value::Array(vec![]));
    assert_eq!(parse_str("{\t}")?.as_object().map(|m| m.len()), Some(0));
    Ok(())
}

#[test]
fn numbers() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_str("13")?, Value::Integer(13));
    assert_eq!(parse_str("-10")?, Value::Integer(-10));
    assert_eq!(parse_str("12.5")?, Value::Float(12.5));
    assert_eq!(parse_str("-0.25")?, Value::Float(-0.25));
    assert_eq!(parse_str("007")?, Value::Integer(7));
    assert_eq!(parse_str("9223372036854775807")?, Value::Integer(i64::MAX));
    Ok(())
}

#[test]
fn negative_zero() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_str("-0")?, Value::Integer(0));
    let f = parse_str("-0.0")?.as_f64().expect("float");
    assert_eq!(f, 0.0);
    assert!(f.is_sign_negative());
    Ok(())
}

#[test]
fn literal_words() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(parse_str("true")?, Value::Bool(true));
    assert_eq!(parse_str("false")?, Value::Bool(false));
    assert_eq!(parse_str("null")?, Value::Null);
    assert!(parse_str("True").is_err());
    assert!(parse_str("NULL").is_err());
    assert!(parse_str("nul").is_err());
    Ok(())
}

#[test]
fn nested_array_and_object() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_str("[1, 2, {\"a\": [4, 5, 6]}]")?;
    let items = v.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::Integer(1));
    assert_eq!(items[1], Value::Integer(2));
    assert_eq!(
        items[2]["a"],
        Value::Array(vec![Value::Integer(4), Value::Integer(5), Value::Integer(6)])
    );
    Ok(())
}

#[test]
fn duplicate_keys_keep_last() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_str(r#"{"a": 1, "b": 2, "a": "later"}"#)?;
    let map = v.as_object().expect("object");
    assert_eq!(map.len(), 2);
    assert_eq!(v["a"], Value::String("later".into()));
    Ok(())
}

#[test]
fn strings_keep_code_points() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_str("\"héllo 日本 / ' \t\"")?;
    assert_eq!(v.as_str(), Some("héllo 日本 / ' \t"));
    assert_eq!(parse_str(r#""""#)?, Value::String(String::new()));
    Ok(())
}

#[test]
fn whitespace_around_every_token() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_str("\n { \"a\" : [ 1 , true , null ] , \"b\" :{ } }\u{3000}")?;
    assert_eq!(v["a"][1], Value::Bool(true));
    assert!(v["a"][2].is_null());
    assert_eq!(v["b"].as_object().map(|m| m.len()), Some(0));
    Ok(())
}

#[test]
fn mixed_document() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse_str(r#"{"hoge":"fuga", "piyo": 13}"#)?;
    assert_eq!(v["hoge"].as_str(), Some("fuga"));
    assert_eq!(v["piyo"].as_i64(), Some(13));
    Ok(())
}
