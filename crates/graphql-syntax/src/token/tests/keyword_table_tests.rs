//! Tests for keyword classification.

use crate::token::TokenKind;
use crate::token::classify_name;
use crate::token::keyword_table::keyword_slot;

/// Every keyword maps back to its own kind.
#[test]
fn every_keyword_classifies_as_itself() {
    for kind in TokenKind::KEYWORDS {
        let text = kind.as_keyword_str().unwrap();
        assert_eq!(classify_name(text), kind, "keyword `{text}`");
    }
}

/// The 18 keywords longer than two bytes land in distinct slots.
#[test]
fn keyword_slots_are_collision_free() {
    let mut seen = [false; 32];
    for kind in TokenKind::KEYWORDS {
        let text = kind.as_keyword_str().unwrap();
        if text.len() < 3 {
            continue;
        }
        let slot = keyword_slot(text.as_bytes());
        assert!(!seen[slot], "slot {slot} reused by `{text}`");
        seen[slot] = true;
    }
}

/// Names sharing a keyword's hash slot or prefix stay identifiers.
#[test]
fn near_keywords_are_identifiers() {
    for name in [
        "frag", "fragments", "Fragment", "types", "ty", "o", "onward", "On",
        "nul", "nullable", "queryx", "inputs", "enumerate", "unions", "_on",
    ] {
        assert_eq!(classify_name(name), TokenKind::Identifier, "name `{name}`");
    }
}

/// Two-byte names other than `on` are identifiers.
#[test]
fn two_byte_names() {
    assert_eq!(classify_name("on"), TokenKind::On);
    assert_eq!(classify_name("id"), TokenKind::Identifier);
    assert_eq!(classify_name("no"), TokenKind::Identifier);
}
