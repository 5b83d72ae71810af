use crate::scanner::offset_to_u32;
use crate::token::TokenKind;

/// A scanned token: its kind, the exact source slice it covers, and the byte
/// offset where it starts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub start: u32,
}

impl<'src> Token<'src> {
    /// Byte offset one past the end of this token.
    pub fn end(&self) -> u32 {
        self.start.saturating_add(offset_to_u32(self.text.len()))
    }
}
