//! Tests for [`crate::token::TokenKind`] helpers.

use crate::token::TokenKind;

#[test]
fn punctuator_bytes_round_trip_through_text() {
    for byte in b"{}()[]:$@=!|&" {
        let kind = TokenKind::from_punctuator_byte(*byte).unwrap();
        assert_eq!(
            kind.as_punctuator_str().unwrap().as_bytes(),
            &[*byte],
        );
    }
    assert_eq!(TokenKind::from_punctuator_byte(b'.'), None);
    assert_eq!(TokenKind::Ellipsis.as_punctuator_str(), Some("..."));
}

#[test]
fn name_like_kinds() {
    assert!(TokenKind::Identifier.is_name_like());
    assert!(TokenKind::Type.is_name_like());
    assert!(TokenKind::On.is_name_like());
    assert!(!TokenKind::String.is_name_like());
    assert!(!TokenKind::Colon.is_name_like());
}

#[test]
fn lexical_error_kinds() {
    assert!(TokenKind::UnknownChar.is_lexical_error());
    assert!(TokenKind::BadUnicodeEscape.is_lexical_error());
    assert!(!TokenKind::Identifier.is_lexical_error());
}

#[test]
fn display_quotes_fixed_text() {
    assert_eq!(TokenKind::LCurly.to_string(), "`{`");
    assert_eq!(TokenKind::Repeatable.to_string(), "`repeatable`");
    assert_eq!(TokenKind::Identifier.to_string(), "name");
    assert_eq!(TokenKind::BadUnicodeEscape.to_string(), "invalid string");
}
