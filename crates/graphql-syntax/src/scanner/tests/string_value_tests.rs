//! Tests for quoted string decoding.

use crate::scanner::StringValueError;
use crate::scanner::decode_string_value;
use std::borrow::Cow;

#[test]
fn no_escapes_borrows() {
    assert!(matches!(decode_string_value("hello"), Ok(Cow::Borrowed("hello"))));
}

#[test]
fn simple_escapes() {
    assert_eq!(
        decode_string_value(r#"\"\\\/\b\f\n\r\t"#).unwrap(),
        "\"\\/\u{0008}\u{000C}\n\r\t",
    );
}

/// `\\u0041` is an escaped backslash followed by plain text, never a
/// unicode escape.
#[test]
fn escapes_decode_left_to_right() {
    assert_eq!(decode_string_value(r"\\u0041").unwrap(), r"\u0041");
}

#[test]
fn unicode_escapes() {
    assert_eq!(decode_string_value(r"\u00e9t\u00E9").unwrap(), "été");
    assert_eq!(decode_string_value(r"\u{00000041}").unwrap(), "A");
    assert_eq!(decode_string_value(r"\uD83D\uDE00!").unwrap(), "\u{1F600}!");
}

/// A high surrogate must be followed by a low surrogate.
#[test]
fn surrogate_errors() {
    assert_eq!(
        decode_string_value(r"\uD83Dx"),
        Err(StringValueError::UnpairedSurrogate(r"\uD83D".to_string())),
    );
    assert_eq!(
        decode_string_value(r"\uD83DA"),
        Err(StringValueError::UnpairedSurrogate(r"\uD83D".to_string())),
    );
    assert_eq!(
        decode_string_value(r"\uDE00"),
        Err(StringValueError::UnpairedSurrogate(r"\uDE00".to_string())),
    );
}

#[test]
fn malformed_unicode_escapes() {
    assert!(matches!(
        decode_string_value(r"\u00G1"),
        Err(StringValueError::InvalidUnicodeEscape(_)),
    ));
    assert!(matches!(
        decode_string_value(r"\u{110000}"),
        Err(StringValueError::InvalidUnicodeEscape(_)),
    ));
    assert!(matches!(
        decode_string_value(r"\u{D800}"),
        Err(StringValueError::InvalidUnicodeEscape(_)),
    ));
    assert!(matches!(
        decode_string_value(r"\u{0041"),
        Err(StringValueError::InvalidUnicodeEscape(_)),
    ));
}

#[test]
fn unknown_escape() {
    assert_eq!(
        decode_string_value(r"ok\x"),
        Err(StringValueError::InvalidEscapeSequence(r"\x".to_string())),
    );
    assert_eq!(
        decode_string_value("\\"),
        Err(StringValueError::InvalidEscapeSequence("\\".to_string())),
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        StringValueError::InvalidEscapeSequence(r"\x".to_string()).to_string(),
        r"invalid escape sequence: `\x`",
    );
    assert_eq!(
        StringValueError::UnterminatedString.to_string(),
        "unterminated string: missing closing quote",
    );
}
