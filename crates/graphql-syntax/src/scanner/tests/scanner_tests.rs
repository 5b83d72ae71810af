//! Tests for [`crate::Scanner`].

use crate::Scanner;
use crate::TokenKind;
use crate::scanner::StringValueError;
use crate::scanner::offset_to_u32;
use std::borrow::Cow;

/// Helper to collect all token kinds from a source string.
fn token_kinds(source: &str) -> Vec<TokenKind> {
    Scanner::new(source).map(|t| t.kind).collect()
}

/// Helper to collect `(kind, text)` pairs from a source string.
fn tokens(source: &str) -> Vec<(TokenKind, &str)> {
    Scanner::new(source).map(|t| (t.kind, t.text)).collect()
}

/// Scans a single token and returns its kind and decoded string value.
fn scan_string(source: &str) -> (TokenKind, Option<String>) {
    let mut scanner = Scanner::new(source);
    let kind = scanner.advance().unwrap();
    let value = scanner.string_value().map(str::to_string);
    assert_eq!(scanner.advance(), None, "trailing input in {source:?}");
    (kind, value)
}

// =============================================================================
// Punctuators and keywords
// =============================================================================

/// Each punctuator scanned alone is exactly one token covering the input.
#[test]
fn single_punctuators() {
    for text in ["{", "}", "(", ")", "[", "]", ":", "$", "@", "...", "=", "!", "|", "&"] {
        let scanned = tokens(text);
        assert_eq!(scanned.len(), 1, "{text}");
        let (kind, token_text) = scanned[0];
        assert_eq!(kind.as_punctuator_str(), Some(text));
        assert_eq!(token_text, text);
    }
}

#[test]
fn adjacent_punctuators() {
    assert_eq!(
        token_kinds("{}()[]:$@...=!|&"),
        vec![
            TokenKind::LCurly,
            TokenKind::RCurly,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Colon,
            TokenKind::VarSign,
            TokenKind::DirSign,
            TokenKind::Ellipsis,
            TokenKind::Equals,
            TokenKind::Bang,
            TokenKind::Pipe,
            TokenKind::Amp,
        ],
    );
}

#[test]
fn every_keyword_scans_as_itself() {
    for kind in TokenKind::KEYWORDS {
        let text = kind.as_keyword_str().unwrap();
        assert_eq!(tokens(text), vec![(kind, text)]);
    }
}

/// A name that merely starts with a keyword is an identifier.
#[test]
fn keyword_prefixes_are_identifiers() {
    assert_eq!(tokens("fragments"), vec![(TokenKind::Identifier, "fragments")]);
    assert_eq!(tokens("onward"), vec![(TokenKind::Identifier, "onward")]);
    assert_eq!(tokens("frag"), vec![(TokenKind::Identifier, "frag")]);
    assert_eq!(tokens("_type"), vec![(TokenKind::Identifier, "_type")]);
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn float_literal() {
    assert_eq!(tokens("1.2"), vec![(TokenKind::Float, "1.2")]);
    assert_eq!(tokens("-1.5e-3"), vec![(TokenKind::Float, "-1.5e-3")]);
    assert_eq!(tokens("6E+10"), vec![(TokenKind::Float, "6E+10")]);
}

/// The fraction needs a digit after the dot, so the ellipsis survives.
#[test]
fn int_ellipsis_int() {
    assert_eq!(
        tokens("1...2"),
        vec![
            (TokenKind::Int, "1"),
            (TokenKind::Ellipsis, "..."),
            (TokenKind::Int, "2"),
        ],
    );
}

#[test]
fn integer_boundaries() {
    assert_eq!(tokens("-42"), vec![(TokenKind::Int, "-42")]);
    assert_eq!(tokens("0"), vec![(TokenKind::Int, "0")]);
    assert_eq!(tokens("01"), vec![(TokenKind::Int, "0"), (TokenKind::Int, "1")]);
    assert_eq!(
        tokens("1e"),
        vec![(TokenKind::Int, "1"), (TokenKind::Identifier, "e")],
    );
    assert_eq!(
        tokens("1."),
        vec![(TokenKind::Int, "1"), (TokenKind::UnknownChar, ".")],
    );
}

#[test]
fn lone_minus_is_unknown() {
    assert_eq!(
        tokens("- 1"),
        vec![(TokenKind::UnknownChar, "-"), (TokenKind::Int, "1")],
    );
}

// =============================================================================
// Ignored input
// =============================================================================

#[test]
fn commas_comments_and_bom_are_ignored() {
    let source = "\u{FEFF}a,,\tb # trailing comment\r\n# whole line\nc";
    assert_eq!(
        tokens(source),
        vec![
            (TokenKind::Identifier, "a"),
            (TokenKind::Identifier, "b"),
            (TokenKind::Identifier, "c"),
        ],
    );
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(token_kinds("a # no newline"), vec![TokenKind::Identifier]);
    assert!(Scanner::new("  # only a comment\n,").is_done());
}

#[test]
fn token_offsets_and_lines() {
    let mut scanner = Scanner::new("query\n  {\n\n field }");
    assert_eq!(scanner.advance(), Some(TokenKind::Query));
    assert_eq!(scanner.token_start(), 0);
    assert_eq!(scanner.token_line(), 1);
    assert_eq!(scanner.advance(), Some(TokenKind::LCurly));
    assert_eq!(scanner.token_start(), 8);
    assert_eq!(scanner.token_line(), 2);
    assert_eq!(scanner.advance(), Some(TokenKind::Identifier));
    assert_eq!(scanner.token_line(), 4);
    assert_eq!(scanner.line(), 4);
    assert_eq!(scanner.token().unwrap().end(), 17);
}

// =============================================================================
// Unknown characters
// =============================================================================

#[test]
fn unknown_characters_are_single_tokens() {
    assert_eq!(
        tokens("?é.."),
        vec![
            (TokenKind::UnknownChar, "?"),
            (TokenKind::UnknownChar, "é"),
            (TokenKind::UnknownChar, "."),
            (TokenKind::UnknownChar, "."),
        ],
    );
}

#[test]
fn invalid_utf8_is_rejected_on_construction() {
    let err = Scanner::from_bytes(b"{ a \xff }").unwrap_err();
    assert!(matches!(
        err,
        crate::ParseError::InvalidUtf8 { valid_up_to: 4 },
    ));
    assert!(Scanner::from_bytes(b"{ a }").is_ok());
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn quoted_string_with_escapes() {
    let (kind, value) = scan_string(r#""a\"b\\c\/d\n\t\u0041""#);
    assert_eq!(kind, TokenKind::String);
    assert_eq!(value.as_deref(), Some("a\"b\\c/d\n\tA"));
}

/// Unescaped strings are handed out borrowed from the source.
#[test]
fn plain_string_is_borrowed() {
    let mut scanner = Scanner::new("\"plain\"");
    assert_eq!(scanner.advance(), Some(TokenKind::String));
    assert_eq!(scanner.token_text(), "\"plain\"");
    assert!(matches!(scanner.take_string_value(), Some(Cow::Borrowed("plain"))));
}

#[test]
fn surrogate_pair_decodes_to_one_char() {
    let (kind, value) = scan_string(r#""\uD83D\uDE00""#);
    assert_eq!(kind, TokenKind::String);
    assert_eq!(value.as_deref(), Some("\u{1F600}"));
}

#[test]
fn lone_surrogate_is_bad_escape() {
    let mut scanner = Scanner::new(r#""\uD800" x"#);
    assert_eq!(scanner.advance(), Some(TokenKind::BadUnicodeEscape));
    assert!(matches!(
        scanner.string_error(),
        Some(StringValueError::UnpairedSurrogate(_)),
    ));
    assert_eq!(scanner.string_value(), None);
    assert_eq!(scanner.advance(), Some(TokenKind::Identifier));
}

#[test]
fn invalid_escape_is_bad_escape() {
    assert_eq!(token_kinds(r#""\q" a"#), vec![TokenKind::BadUnicodeEscape, TokenKind::Identifier]);
    assert_eq!(token_kinds(r#""\u12""#), vec![TokenKind::BadUnicodeEscape]);
    assert_eq!(token_kinds(r#""\u{41}""#), vec![TokenKind::BadUnicodeEscape]);
}

#[test]
fn braced_unicode_escape() {
    assert_eq!(scan_string(r#""\u{1F600}""#).1.as_deref(), Some("\u{1F600}"));
    assert_eq!(scan_string(r#""\u{0041}""#).1.as_deref(), Some("A"));
}

/// An unterminated string runs to the end of input.
#[test]
fn unterminated_strings() {
    let mut scanner = Scanner::new("{ \"abc");
    assert_eq!(scanner.advance(), Some(TokenKind::LCurly));
    assert_eq!(scanner.advance(), Some(TokenKind::BadUnicodeEscape));
    assert_eq!(scanner.token_text(), "\"abc");
    assert_eq!(scanner.string_error(), Some(&StringValueError::UnterminatedString));
    assert_eq!(scanner.advance(), None);

    assert_eq!(token_kinds("\"\"\"abc\"\""), vec![TokenKind::BadUnicodeEscape]);
    assert_eq!(token_kinds("\"trailing\\"), vec![TokenKind::BadUnicodeEscape]);
}

#[test]
fn quoted_string_may_span_lines() {
    let (kind, value) = scan_string("\"a\nb\"");
    assert_eq!(kind, TokenKind::String);
    assert_eq!(value.as_deref(), Some("a\nb"));
}

#[test]
fn empty_strings() {
    assert_eq!(scan_string("\"\""), (TokenKind::String, Some(String::new())));
    assert_eq!(scan_string("\"\"\"\"\"\""), (TokenKind::String, Some(String::new())));
}

#[test]
fn block_string_with_escaped_triple_quote() {
    let source = "\"\"\"\n\n      block string uses \\\"\"\"\n\n\"\"\"";
    let mut scanner = Scanner::new(source);
    assert_eq!(scanner.advance(), Some(TokenKind::String));
    assert_eq!(scanner.token_text(), source);
    assert_eq!(scanner.string_value(), Some("block string uses \"\"\""));
    assert_eq!(scanner.advance(), None);
}

/// Block strings decode the same escapes as quoted strings, after
/// de-indentation.
#[test]
fn block_string_escapes_are_decoded() {
    assert_eq!(
        scan_string(r#""""a\nb""""#),
        (TokenKind::String, Some("a\nb".to_string())),
    );
    assert_eq!(
        scan_string(r#""""C:\new\u0041""""#),
        (TokenKind::String, Some("C:\newA".to_string())),
    );
    assert_eq!(
        scan_string("\"\"\"\n    \\t1\n    2\n\"\"\""),
        (TokenKind::String, Some("\t1\n2".to_string())),
    );
}

#[test]
fn block_string_with_bad_escape() {
    let mut scanner = Scanner::new(r#""""\q""" type"#);
    assert_eq!(scanner.advance(), Some(TokenKind::BadUnicodeEscape));
    assert_eq!(scanner.token_text(), r#""""\q""""#);
    assert_eq!(scanner.string_value(), None);
    assert_eq!(
        scanner.string_error(),
        Some(&StringValueError::InvalidEscapeSequence(r"\q".to_string())),
    );
    assert_eq!(scanner.advance(), Some(TokenKind::Type));
}

#[test]
fn block_string_followed_by_tokens() {
    assert_eq!(
        tokens("\"\"\"doc\"\"\" type"),
        vec![
            (TokenKind::String, "\"\"\"doc\"\"\""),
            (TokenKind::Type, "type"),
        ],
    );
}

// =============================================================================
// Offsets
// =============================================================================

#[test]
fn token_offsets_and_ends() {
    let tokens: Vec<_> = Scanner::new("{ abc }").collect();
    let spans: Vec<(u32, u32)> = tokens.iter().map(|t| (t.start, t.end())).collect();
    assert_eq!(spans, [(0, 1), (2, 5), (6, 7)]);
}

/// Offsets past `u32::MAX` saturate rather than wrap around.
#[cfg(target_pointer_width = "64")]
#[test]
fn offsets_saturate_at_u32_max() {
    assert_eq!(offset_to_u32(0), 0);
    assert_eq!(offset_to_u32(u32::MAX as usize), u32::MAX);
    assert_eq!(offset_to_u32(u32::MAX as usize + 1), u32::MAX);
    assert_eq!(offset_to_u32(usize::MAX), u32::MAX);

    let token = crate::Token {
        kind: TokenKind::Identifier,
        text: "abc",
        start: u32::MAX - 1,
    };
    assert_eq!(token.end(), u32::MAX);
}
