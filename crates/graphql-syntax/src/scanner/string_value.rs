//! Decoding of quoted (`"..."`) string literals.

use memchr::memchr;
use std::borrow::Cow;

/// Why a string literal could not be decoded.
///
/// The scanner turns any of these into a
/// [`TokenKind::BadUnicodeEscape`](crate::TokenKind::BadUnicodeEscape)
/// token and keeps the error around for diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StringValueError {
    #[error("invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    #[error("invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    #[error("unpaired UTF-16 surrogate: `{0}`")]
    UnpairedSurrogate(String),

    #[error("unterminated string: missing closing quote")]
    UnterminatedString,
}

/// Decodes the content of a quoted string (without its surrounding quotes)
/// in a single left-to-right pass.
///
/// Returns the input borrowed when it holds no backslash.
pub fn decode_string_value(content: &str) -> Result<Cow<'_, str>, StringValueError> {
    if memchr(b'\\', content.as_bytes()).is_none() {
        return Ok(Cow::Borrowed(content));
    }

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(idx) = memchr(b'\\', rest.as_bytes()) {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        let consumed = decode_escape(rest, &mut out)?;
        rest = &rest[consumed..];
    }
    out.push_str(rest);
    Ok(Cow::Owned(out))
}

/// Decodes one escape sequence at the start of `s` (which begins with `\`),
/// pushing the decoded character to `out` and returning the number of bytes
/// consumed.
fn decode_escape(s: &str, out: &mut String) -> Result<usize, StringValueError> {
    let decoded = match s.as_bytes().get(1) {
        Some(b'"') => '"',
        Some(b'\\') => '\\',
        Some(b'/') => '/',
        Some(b'b') => '\u{0008}',
        Some(b'f') => '\u{000C}',
        Some(b'n') => '\n',
        Some(b'r') => '\r',
        Some(b't') => '\t',
        Some(b'u') => return decode_unicode_escape(s, out),
        _ => {
            return Err(StringValueError::InvalidEscapeSequence(snippet(s, 2)));
        },
    };
    out.push(decoded);
    Ok(2)
}

/// Decodes `\uXXXX`, a `\uXXXX\uXXXX` surrogate pair, or `\u{X...}`.
fn decode_unicode_escape(s: &str, out: &mut String) -> Result<usize, StringValueError> {
    if s.as_bytes().get(2) == Some(&b'{') {
        let Some(close) = memchr(b'}', &s.as_bytes()[3..]) else {
            return Err(StringValueError::InvalidUnicodeEscape(snippet(s, 8)));
        };
        let hex = &s[3..3 + close];
        let consumed = 3 + close + 1;
        if hex.len() < 4 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StringValueError::InvalidUnicodeEscape(
                s[..consumed].to_string(),
            ));
        }
        let ch = u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                StringValueError::InvalidUnicodeEscape(s[..consumed].to_string())
            })?;
        out.push(ch);
        return Ok(consumed);
    }

    let Some(code) = hex4(s, 2) else {
        return Err(StringValueError::InvalidUnicodeEscape(snippet(s, 6)));
    };
    match code {
        0xD800..=0xDBFF => {
            let low = if s[6..].starts_with("\\u") { hex4(s, 8) } else { None };
            match low {
                Some(low @ 0xDC00..=0xDFFF) => {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    let ch = char::from_u32(combined).ok_or_else(|| {
                        StringValueError::UnpairedSurrogate(s[..12].to_string())
                    })?;
                    out.push(ch);
                    Ok(12)
                },
                _ => Err(StringValueError::UnpairedSurrogate(s[..6].to_string())),
            }
        },
        0xDC00..=0xDFFF => Err(StringValueError::UnpairedSurrogate(s[..6].to_string())),
        _ => {
            let ch = char::from_u32(code).ok_or_else(|| {
                StringValueError::InvalidUnicodeEscape(s[..6].to_string())
            })?;
            out.push(ch);
            Ok(6)
        },
    }
}

/// Parses exactly four hex digits at byte offset `at`.
fn hex4(s: &str, at: usize) -> Option<u32> {
    let digits = s.as_bytes().get(at..at + 4)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    digits
        .iter()
        .try_fold(0u32, |acc, b| Some(acc * 16 + (*b as char).to_digit(16)?))
}

/// The first `max_chars` characters of `s`, for error messages.
fn snippet(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
