//! A GraphQL syntax front end: a byte-level scanner, a recursive-descent
//! parser and a traversable AST covering both executable documents
//! (operations and fragments) and type-system documents (schema, type and
//! directive definitions and their extensions).
//!
//! ```rust
//! let document = graphql_syntax::parse(
//!     "mutation { likeStory(storyID: 123) { story { id } } }",
//! ).unwrap();
//! assert_eq!(document.definitions.len(), 1);
//! assert!(document.definitions[0].is_executable_definition());
//! ```
//!
//! Parsing stops at the first syntax error. The resulting
//! [`ParseError`] carries the expected and actual token kinds and the
//! 1-based line of the offending token.

pub mod ast;
pub mod fold;
mod parse_error;
mod parser;
mod parser_config;
pub mod scanner;
pub mod token;
pub mod visit;

pub use parse_error::ParseError;
pub use parser::Parser;
pub use parser_config::ParserConfig;
pub use scanner::Scanner;
pub use smallvec::SmallVec;
pub use token::Token;
pub use token::TokenKind;

/// Parses `source` as a GraphQL document with the default configuration.
pub fn parse(source: &str) -> Result<ast::Document<'_>, ParseError> {
    Parser::new(source).parse()
}

/// Parses raw bytes as a GraphQL document, failing with
/// [`ParseError::InvalidUtf8`] if they are not valid UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<ast::Document<'_>, ParseError> {
    Parser::from_bytes(bytes, ParserConfig::default())?.parse()
}

#[cfg(test)]
mod tests;
