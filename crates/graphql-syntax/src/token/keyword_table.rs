//! Keyword recognition.
//!
//! Every keyword except `on` has a distinct `(2nd byte, 3rd byte)` pair. A
//! multiplicative hash of that pair indexes a 32-slot table with no
//! collisions, so a lookup is one multiply, one shift and one byte compare
//! against the single candidate in the slot.

use crate::token::TokenKind;

const HASH_MULTIPLIER: u32 = 19_637_591;
const HASH_SHIFT: u32 = 27;
const HASH_MASK: u32 = 0x1f;

/// Slot contents for the perfect hash.
static KEYWORD_SLOTS: [Option<(&str, TokenKind)>; 32] = [
    None,
    Some(("fragment", TokenKind::Fragment)),
    None,
    None,
    None,
    Some(("schema", TokenKind::Schema)),
    None,
    Some(("subscription", TokenKind::Subscription)),
    Some(("interface", TokenKind::Interface)),
    Some(("mutation", TokenKind::Mutation)),
    Some(("extend", TokenKind::Extend)),
    None,
    Some(("union", TokenKind::Union)),
    None,
    Some(("enum", TokenKind::Enum)),
    Some(("true", TokenKind::True)),
    None,
    Some(("repeatable", TokenKind::Repeatable)),
    Some(("implements", TokenKind::Implements)),
    Some(("input", TokenKind::Input)),
    Some(("type", TokenKind::Type)),
    None,
    None,
    None,
    Some(("query", TokenKind::Query)),
    None,
    None,
    Some(("false", TokenKind::False)),
    None,
    Some(("directive", TokenKind::Directive)),
    Some(("null", TokenKind::Null)),
    Some(("scalar", TokenKind::Scalar)),
];

/// Computes the slot index for a name of at least three bytes.
#[inline]
pub(crate) fn keyword_slot(name: &[u8]) -> usize {
    let key = u32::from(name[1]) | (u32::from(name[2]) << 8);
    ((key.wrapping_mul(HASH_MULTIPLIER) >> HASH_SHIFT) & HASH_MASK) as usize
}

/// Classifies a scanned name as a keyword or an identifier.
///
/// `name` must already match `[_A-Za-z][_0-9A-Za-z]*`.
pub fn classify_name(name: &str) -> TokenKind {
    let bytes = name.as_bytes();
    if bytes.len() == 2 {
        return if bytes == b"on" {
            TokenKind::On
        } else {
            TokenKind::Identifier
        };
    }
    if bytes.len() < 3 {
        return TokenKind::Identifier;
    }
    match KEYWORD_SLOTS[keyword_slot(bytes)] {
        Some((keyword, kind)) if keyword.as_bytes() == bytes => kind,
        _ => TokenKind::Identifier,
    }
}
