//! A pull-based scanner over a `&str` source.
//!
//! The scanner is total: every call to [`Scanner::advance`] either reaches
//! the end of input or produces a token and moves the cursor forward by at
//! least one byte. Malformed input becomes [`TokenKind::UnknownChar`] or
//! [`TokenKind::BadUnicodeEscape`] tokens for the parser to reject.
//!
//! # Usage
//!
//! ```rust
//! use graphql_syntax::Scanner;
//! use graphql_syntax::TokenKind;
//!
//! let mut scanner = Scanner::new("{ name }");
//! assert_eq!(scanner.advance(), Some(TokenKind::LCurly));
//! assert_eq!(scanner.advance(), Some(TokenKind::Identifier));
//! assert_eq!(scanner.token_text(), "name");
//! assert_eq!(scanner.advance(), Some(TokenKind::RCurly));
//! assert_eq!(scanner.advance(), None);
//! ```

use crate::ParseError;
use crate::scanner::StringValueError;
use crate::scanner::decode_block_string_value;
use crate::scanner::decode_string_value;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token::classify_name;
use memchr::memchr2;
use memchr::memmem;
use std::borrow::Cow;

const BYTE_ORDER_MARK: &[u8] = "\u{FEFF}".as_bytes();
const BLOCK_QUOTE: &[u8] = b"\"\"\"";

/// Converts GraphQL source text into a lazy sequence of tokens.
///
/// See module documentation for details.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    /// The full source text being scanned.
    source: &'src str,

    /// Byte offset of the next unscanned byte.
    pos: usize,

    /// Byte offset where the most recent token starts.
    token_start: usize,

    /// Kind of the most recent token. `None` before the first call to
    /// `advance()` and once the input is exhausted.
    kind: Option<TokenKind>,

    /// Decoded value of the most recent `String` token.
    string_value: Option<Cow<'src, str>>,

    /// Why the most recent `BadUnicodeEscape` token failed to decode.
    string_error: Option<StringValueError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            token_start: 0,
            kind: None,
            string_value: None,
            string_error: None,
        }
    }

    /// Creates a scanner over raw bytes, failing if they are not valid UTF-8.
    pub fn from_bytes(bytes: &'src [u8]) -> Result<Self, ParseError> {
        std::str::from_utf8(bytes)
            .map(Self::new)
            .map_err(|err| ParseError::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Kind of the most recently scanned token.
    pub fn kind(&self) -> Option<TokenKind> {
        self.kind
    }

    /// The exact source slice of the most recently scanned token.
    pub fn token_text(&self) -> &'src str {
        &self.source[self.token_start..self.pos]
    }

    /// Byte offset where the most recently scanned token starts.
    ///
    /// Offsets are `u32`; past 4 GiB of input they saturate at `u32::MAX`.
    pub fn token_start(&self) -> u32 {
        offset_to_u32(self.token_start)
    }

    /// The most recently scanned token, if any.
    pub fn token(&self) -> Option<Token<'src>> {
        self.kind.map(|kind| Token {
            kind,
            text: self.token_text(),
            start: self.token_start(),
        })
    }

    /// Decoded value of the most recent token when it is a `String`.
    pub fn string_value(&self) -> Option<&str> {
        self.string_value.as_deref()
    }

    /// Moves the decoded value of the most recent `String` token out of the
    /// scanner.
    pub fn take_string_value(&mut self) -> Option<Cow<'src, str>> {
        self.string_value.take()
    }

    /// The reason the most recent `BadUnicodeEscape` token failed to decode.
    pub fn string_error(&self) -> Option<&StringValueError> {
        self.string_error.as_ref()
    }

    /// 1-based line of the current scan position.
    pub fn line(&self) -> usize {
        line_at(self.source, self.pos)
    }

    /// 1-based line of the start of the most recent token.
    pub fn token_line(&self) -> usize {
        line_at(self.source, self.token_start)
    }

    /// Returns `true` once only ignored input remains.
    pub fn is_done(&self) -> bool {
        skip_ignored(self.source.as_bytes(), self.pos) >= self.source.len()
    }

    // =========================================================================
    // Scanner main loop
    // =========================================================================

    /// Scans the next token and returns its kind, or `None` at end of input.
    pub fn advance(&mut self) -> Option<TokenKind> {
        self.string_value = None;
        self.string_error = None;
        self.skip_ignored();
        self.token_start = self.pos;

        let Some(&byte) = self.source.as_bytes().get(self.pos) else {
            self.kind = None;
            return None;
        };

        let kind = match byte {
            b'0'..=b'9' | b'-' => self.lex_number(),
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => self.lex_name(),
            b'"' if self.remaining().starts_with(BLOCK_QUOTE) => self.lex_block_string(),
            b'"' => self.lex_string(),
            b'.' => self.lex_dot_or_ellipsis(),
            _ => match TokenKind::from_punctuator_byte(byte) {
                Some(kind) => {
                    self.pos += 1;
                    kind
                },
                None => self.lex_unknown_char(),
            },
        };

        debug_assert!(self.pos > self.token_start);
        self.kind = Some(kind);
        Some(kind)
    }

    fn remaining(&self) -> &'src [u8] {
        &self.source.as_bytes()[self.pos..]
    }

    fn skip_ignored(&mut self) {
        self.pos = skip_ignored(self.source.as_bytes(), self.pos);
    }

    // =========================================================================
    // Names and numbers
    // =========================================================================

    fn lex_name(&mut self) -> TokenKind {
        let bytes = self.source.as_bytes();
        let start = self.pos;
        self.pos += 1;
        while bytes
            .get(self.pos)
            .is_some_and(|b| *b == b'_' || b.is_ascii_alphanumeric())
        {
            self.pos += 1;
        }
        classify_name(&self.source[start..self.pos])
    }

    /// Scans `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    ///
    /// A fraction or exponent that is not followed by a digit is left for the
    /// next token, so `1...2` scans as `Int Ellipsis Int` and `01` as two
    /// integers.
    fn lex_number(&mut self) -> TokenKind {
        let bytes = self.source.as_bytes();
        let mut p = self.pos;

        if bytes[p] == b'-' {
            p += 1;
        }
        match bytes.get(p) {
            Some(b'0') => p += 1,
            Some(b'1'..=b'9') => p = skip_digits(bytes, p + 1),
            _ => {
                self.pos += 1;
                return TokenKind::UnknownChar;
            },
        }

        let mut kind = TokenKind::Int;
        if bytes.get(p) == Some(&b'.') && bytes.get(p + 1).is_some_and(u8::is_ascii_digit) {
            p = skip_digits(bytes, p + 2);
            kind = TokenKind::Float;
        }
        if matches!(bytes.get(p), Some(b'e' | b'E')) {
            let mut q = p + 1;
            if matches!(bytes.get(q), Some(b'+' | b'-')) {
                q += 1;
            }
            if bytes.get(q).is_some_and(u8::is_ascii_digit) {
                p = skip_digits(bytes, q + 1);
                kind = TokenKind::Float;
            }
        }

        self.pos = p;
        kind
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Scans a quoted string up to the first unescaped `"` and decodes it.
    fn lex_string(&mut self) -> TokenKind {
        let bytes = self.source.as_bytes();
        let content_start = self.pos + 1;
        let mut p = content_start;

        loop {
            match memchr2(b'"', b'\\', &bytes[p..]) {
                None => {
                    self.pos = bytes.len();
                    self.string_error = Some(StringValueError::UnterminatedString);
                    return TokenKind::BadUnicodeEscape;
                },
                Some(offset) if bytes[p + offset] == b'"' => {
                    p += offset;
                    break;
                },
                Some(offset) => {
                    // Skip the backslash and the byte it escapes.
                    p = (p + offset + 2).min(bytes.len());
                },
            }
        }

        self.pos = p + 1;
        match decode_string_value(&self.source[content_start..p]) {
            Ok(value) => {
                self.string_value = Some(value);
                TokenKind::String
            },
            Err(err) => {
                self.string_error = Some(err);
                TokenKind::BadUnicodeEscape
            },
        }
    }

    /// Scans a block string up to the first `"""` not preceded by `\`.
    /// Its escapes are decoded after de-indentation.
    fn lex_block_string(&mut self) -> TokenKind {
        let bytes = self.source.as_bytes();
        let content_start = self.pos + BLOCK_QUOTE.len();
        let mut p = content_start;

        loop {
            match memmem::find(&bytes[p..], BLOCK_QUOTE) {
                None => {
                    self.pos = bytes.len();
                    self.string_error = Some(StringValueError::UnterminatedString);
                    return TokenKind::BadUnicodeEscape;
                },
                Some(offset) if offset + p > content_start && bytes[p + offset - 1] == b'\\' => {
                    p += offset + BLOCK_QUOTE.len();
                },
                Some(offset) => {
                    p += offset;
                    break;
                },
            }
        }

        self.pos = p + BLOCK_QUOTE.len();
        match decode_block_string_value(&self.source[content_start..p]) {
            Ok(value) => {
                self.string_value = Some(value);
                TokenKind::String
            },
            Err(err) => {
                self.string_error = Some(err);
                TokenKind::BadUnicodeEscape
            },
        }
    }

    // =========================================================================
    // Punctuation and unknown input
    // =========================================================================

    fn lex_dot_or_ellipsis(&mut self) -> TokenKind {
        if self.remaining().starts_with(b"...") {
            self.pos += 3;
            TokenKind::Ellipsis
        } else {
            self.pos += 1;
            TokenKind::UnknownChar
        }
    }

    /// Consumes one full UTF-8 character.
    fn lex_unknown_char(&mut self) -> TokenKind {
        let width = self.source[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.pos += width;
        TokenKind::UnknownChar
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()?;
        self.token()
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Skips one combined run of whitespace, commas, line terminators, byte
/// order marks and `#` comments starting at `pos`.
fn skip_ignored(bytes: &[u8], mut pos: usize) -> usize {
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' | b',' => pos += 1,
            b'#' => {
                pos = match memchr2(b'\n', b'\r', &bytes[pos..]) {
                    Some(offset) => pos + offset,
                    None => bytes.len(),
                };
            },
            0xEF if bytes[pos..].starts_with(BYTE_ORDER_MARK) => {
                pos += BYTE_ORDER_MARK.len();
            },
            _ => break,
        }
    }
    pos
}

fn skip_digits(bytes: &[u8], mut p: usize) -> usize {
    while bytes.get(p).is_some_and(u8::is_ascii_digit) {
        p += 1;
    }
    p
}

/// 1-based line containing byte `offset` of `source`.
pub(crate) fn line_at(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    memchr::memchr_iter(b'\n', &source.as_bytes()[..end]).count() + 1
}

/// Narrows a byte offset to the `u32` stored in tokens and AST nodes,
/// saturating instead of wrapping.
pub(crate) fn offset_to_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
