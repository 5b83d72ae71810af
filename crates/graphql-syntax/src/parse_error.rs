use crate::TokenKind;
use smallvec::SmallVec;

/// Why a document could not be parsed.
///
/// Parsing stops at the first error; no partial document is returned.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The current token cannot continue the production being parsed.
    #[error(
        "line {line}: expected {}, found {}",
        describe_expected(.expected),
        describe_actual(*.actual, .text),
    )]
    UnexpectedToken {
        /// The token kinds that would have been accepted here.
        expected: SmallVec<[TokenKind; 4]>,
        /// The offending token's kind, or `None` at end of input.
        actual: Option<TokenKind>,
        /// The offending token's source text (empty at end of input).
        text: String,
        line: usize,
    },

    /// A directive definition named a location that is neither an
    /// executable nor a type-system directive location.
    #[error("line {line}: unknown directive location `{name}`")]
    UnknownDirectiveLocation { name: String, line: usize },

    /// Selection sets, list/object values or list types nested deeper than
    /// the configured [`ParserConfig::max_depth`](crate::ParserConfig).
    #[error("line {line}: nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize, line: usize },

    /// The input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

impl ParseError {
    /// 1-based line of the offending token, when the error has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::UnknownDirectiveLocation { line, .. }
            | ParseError::NestingTooDeep { line, .. } => Some(*line),
            ParseError::InvalidUtf8 { .. } => None,
        }
    }

    /// Returns `true` if the input ended before the document was complete.
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, ParseError::UnexpectedToken { actual: None, .. })
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "more input".to_string(),
        [only] => only.to_string(),
        [rest @ .., last] => {
            let rest: Vec<String> = rest.iter().map(ToString::to_string).collect();
            format!("{} or {last}", rest.join(", "))
        },
    }
}

fn describe_actual(actual: Option<TokenKind>, text: &str) -> String {
    match actual {
        None => "end of input".to_string(),
        Some(kind) if kind.is_punctuator() || kind.is_keyword() => kind.to_string(),
        Some(kind) => format!("{kind} `{text}`"),
    }
}
