//! Core token types shared by the scanner and the parser.

mod keyword_table;
#[allow(clippy::module_inception)]
mod token;
mod token_kind;

pub use keyword_table::classify_name;
pub use token::Token;
pub use token_kind::TokenKind;

#[cfg(test)]
mod tests;
