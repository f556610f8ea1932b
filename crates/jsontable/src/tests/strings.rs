use rstest::rstest;

use crate::{ErrorCode, Value, parse};

#[rstest]
#[case(r#""""#, "")]
#[case(r#""hello""#, "hello")]
#[case(r#""héllo wörld""#, "héllo wörld")]
#[case(r#""smile 😀""#, "smile 😀")]
#[case(r#""\"\\\/""#, "\"\\/")]
#[case(r#""\n\r\t\b\f""#, "\n\r\t\u{0008}\u{000C}")]
#[case(r#""a\nb""#, "a\nb")]
fn decodes_string_literals(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input), Ok(Value::String(expected.to_string())));
}

#[rstest]
#[case("\"\\u0041\"", "A")]
#[case("\"\\u00e9\"", "\u{00e9}")]
#[case("\"\\u00E9\"", "\u{00e9}")]
#[case("\"\\u2028\"", "\u{2028}")]
#[case("\"\\u0020\"", " ")]
#[case("\"\\u0041\\u0042\"", "AB")]
fn decodes_unicode_escapes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input), Ok(Value::String(expected.to_string())));
}

#[rstest]
#[case("\"\\ud83d\\ude00\"", "\u{1F600}")]
#[case("\"a\\ud83d\\ude00b\"", "a\u{1F600}b")]
#[case("\"\\ud800\\udc00\"", "\u{10000}")]
#[case("\"\\udbff\\udfff\"", "\u{10FFFF}")]
fn escaped_surrogate_pairs_decode_to_one_character(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input), Ok(Value::String(expected.to_string())));
}

#[test]
fn a_lone_trail_range_escape_is_accepted() {
    // Only lead-range units (0xD800..=0xDBFF) demand a partner. A unit from
    // the complementary range on its own passes the grammar; it cannot live
    // in a Rust string, so it materializes as U+FFFD.
    assert_eq!(
        parse(r#""\udc00""#),
        Ok(Value::String("\u{FFFD}".to_string()))
    );
}

#[rstest]
#[case(r#""\ud83d""#)]
#[case(r#""\ud83dx""#)]
#[case(r#""\ud83d\n""#)]
#[case(r#""\ud83dA""#)]
#[case(r#""\ud800\ud800""#)]
fn a_lead_range_escape_requires_a_trail_range_partner(#[case] input: &str) {
    assert_eq!(
        parse(input).unwrap_err().code,
        ErrorCode::MissingHighSurrogate
    );
}

#[rstest]
#[case(r#""\u12G4""#)]
#[case(r#""\u00""#)]
#[case(r#""\uzzzz""#)]
#[case(r#""\u"#)]
fn a_unicode_escape_requires_four_hex_digits(#[case] input: &str) {
    assert_eq!(
        parse(input).unwrap_err().code,
        ErrorCode::InvalidUnicodeHexString
    );
}

#[rstest]
#[case(r#""\q""#)]
#[case(r#""\U0041""#)]
#[case(r#""\ ""#)]
#[case(r#""\"#)]
fn unknown_escape_characters_are_rejected(#[case] input: &str) {
    assert_eq!(parse(input).unwrap_err().code, ErrorCode::InvalidEscapeChar);
}

#[rstest]
#[case("\"a\nb\"")]
#[case("\"a\tb\"")]
#[case("\"\u{0000}\"")]
#[case("\"\u{001F}\"")]
#[case(r#""abc"#)]
fn control_characters_and_unterminated_strings_are_invalid(#[case] input: &str) {
    assert_eq!(parse(input).unwrap_err().code, ErrorCode::InvalidString);
}

#[test]
fn the_first_character_above_the_control_range_is_allowed() {
    assert_eq!(parse("\"\u{0020}\""), Ok(Value::String(" ".to_string())));
}

#[test]
fn escapes_mix_with_plain_characters() {
    assert_eq!(
        parse(r#""line1\nline2\t!""#),
        Ok(Value::String("line1\nline2\t!".to_string()))
    );
}

#[test]
fn member_names_use_the_same_string_grammar() {
    let value = parse(r#"{"a\n": 1}"#).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(
        object.get_index(0).map(|(name, _)| name.as_str()),
        Some("a\n")
    );
}
