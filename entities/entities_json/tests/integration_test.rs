//! Integration tests for entities_json crate
//!
//! Every rendering must parse as JSON and carry the same structure.

use entities_json::*;
use entities_natural::Integer;

fn parse(value: &JsonValue) -> serde_json::Value {
    let text = value.to_string();
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("{text} is not valid JSON: {e}"))
}

#[test]
fn test_control_characters_round_trip_through_parser() {
    let text: String = (0u32..0x20).filter_map(char::from_u32).chain("\"\\/".chars()).collect();
    let parsed = parse(&JsonValue::String(text.clone()));
    assert_eq!(parsed, serde_json::Value::String(text));
}

#[test]
fn test_astral_and_private_use_characters() {
    let text = "\u{10FFFF}\u{E000}\u{FFFF}\u{1D11E}";
    let parsed = parse(&JsonValue::from(text));
    assert_eq!(parsed.as_str(), Some(text));
}

#[test]
fn test_object_with_repeated_keys_is_valid_text() {
    let value = JsonValue::Object(vec![
        ("a".to_string(), JsonValue::Null),
        ("a".to_string(), JsonValue::Bool(true)),
    ]);
    // The parser keeps the last member; the text itself is still valid.
    assert_eq!(parse(&value)["a"], serde_json::Value::Bool(true));
}

#[test]
fn test_huge_numbers_are_valid_text() {
    let mantissa: Integer = "-123456789012345678901234567890".parse().unwrap();
    let exponent: Integer = "98765432109876543210".parse().unwrap();
    let number = JsonNumber::new(mantissa, Some("0001".to_string()), Some(exponent)).unwrap();
    let value = JsonValue::Array(vec![JsonValue::Number(number)]);
    let parsed = parse(&value);
    assert!(parsed.is_array());
    assert_eq!(
        value.to_string(),
        "[-123456789012345678901234567890.0001e98765432109876543210]"
    );
}

#[test]
fn test_deep_nesting_renders() {
    let mut value = JsonValue::Null;
    for depth in 0..50 {
        value = if depth % 2 == 0 {
            JsonValue::Array(vec![value])
        } else {
            JsonValue::Object(vec![(depth.to_string(), value)])
        };
    }
    assert_eq!(value.to_string().matches("null").count(), 1);
    parse(&value);
}
