use rstest::rstest;

use crate::{Map, Parser, ParserOptions, Value, parse};

#[rstest]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
#[case("null", Value::Null)]
fn literal_keywords(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), Ok(expected));
}

#[rstest]
#[case("true ")]
#[case(" \t\r\n true \t\r\n ")]
#[case("\ntrue")]
fn whitespace_around_a_literal_is_consumed(#[case] input: &str) {
    assert_eq!(parse(input), Ok(Value::Boolean(true)));
}

#[test]
fn parsed_null_is_a_present_value() {
    // A literal `null` concludes normally; it is not a failure.
    let value = parse("null").unwrap();
    assert!(value.is_null());
}

#[test]
fn empty_object_and_empty_array() {
    assert_eq!(parse("{}"), Ok(Value::Object(Map::new())));
    assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
    assert_eq!(parse("{ }"), Ok(Value::Object(Map::new())));
    assert_eq!(parse("[ ]"), Ok(Value::Array(vec![])));
}

#[test]
fn array_elements_keep_source_order() {
    let value = parse("[1, 2, 3]").unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ])
    );
}

#[test]
fn heterogeneous_array() {
    let value = parse(r#"[null, true, "x", -1.5, [], {}]"#).unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Null,
            Value::Boolean(true),
            Value::String("x".to_string()),
            Value::Number(-1.5),
            Value::Array(vec![]),
            Value::Object(Map::new()),
        ])
    );
}

#[test]
fn object_member_order_matches_declaration_order() {
    let value = parse(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
    let object = value.as_object().unwrap();
    let names: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(names, ["b", "a", "c"]);
}

#[test]
fn duplicate_member_overwrites_in_place() {
    let value = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    let object = value.as_object().unwrap();
    let names: Vec<&str> = object.keys().map(String::as_str).collect();
    // "a" keeps its first-declared position but carries the later value.
    assert_eq!(names, ["a", "b"]);
    assert_eq!(object.get_index(0), Some((&"a".to_string(), &Value::Number(3.0))));
}

#[test]
fn whitespace_between_tokens_does_not_change_the_value() {
    let compact = parse(r#"{"a":[1,{"b":2}],"c":"d"}"#).unwrap();
    let spaced = parse("\n{ \"a\" :\t[ 1 ,\r\n{ \"b\" : 2 } ] , \"c\" : \"d\" }\n").unwrap();
    assert_eq!(compact, spaced);
}

#[test]
fn nesting_at_the_depth_limit_parses() {
    let options = ParserOptions { max_depth: 16 };
    let input = format!("{}1{}", "[".repeat(16), "]".repeat(16));
    let value = Parser::with_options(&input, options)
        .parse_document()
        .unwrap();
    let mut current = &value;
    for _ in 0..16 {
        current = &current.as_array().unwrap()[0];
    }
    assert_eq!(*current, Value::Number(1.0));
}

#[test]
fn parse_value_stops_after_the_first_value() {
    let mut parser = Parser::new(r#"{"a": 1} [2] "x""#);
    assert!(parser.parse_value().unwrap().is_object());
    assert_eq!(
        parser.parse_value(),
        Ok(Value::Array(vec![Value::Number(2.0)]))
    );
    assert_eq!(parser.parse_value(), Ok(Value::String("x".to_string())));
}

#[test]
fn parse_value_reports_its_offset() {
    let mut parser = Parser::new("true  false");
    parser.parse_value().unwrap();
    // Trailing whitespace after the literal is consumed by its final state.
    assert_eq!(parser.offset(), 6);
}

fn from_reference(reference: &serde_json::Value) -> Value {
    match reference {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap()),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(from_reference).collect())
        }
        serde_json::Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(name, value)| (name.clone(), from_reference(value)))
                .collect(),
        ),
    }
}

#[rstest]
#[case(r#"{"menu": {"id": 1, "items": [{"label": "Open"}, {"label": null}]}}"#)]
#[case(r#"[0, -1, 2.5, 1e10, 1E+2, 4e-3]"#)]
#[case(r#"{"empty": {}, "list": [], "text": "a\nbA", "flag": false}"#)]
#[case("[[[[\"deep\"]]]]")]
#[case(r#"{"mixed": [true, {"k": [null, "v"]}, -0.125]}"#)]
fn agrees_with_serde_json_on_well_formed_documents(#[case] input: &str) {
    let reference: serde_json::Value = serde_json::from_str(input).unwrap();
    assert_eq!(parse(input).unwrap(), from_reference(&reference));
}
