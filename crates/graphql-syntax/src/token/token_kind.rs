use std::fmt;

/// The closed set of token kinds produced by the
/// [`Scanner`](crate::Scanner).
///
/// Keywords are lexically identical to identifiers; they only differ by
/// membership in the keyword table. GraphQL keywords are contextual, so the
/// parser accepts every keyword kind wherever a name is expected.
///
/// `UnknownChar` and `BadUnicodeEscape` are lexical-failure sentinels. The
/// scanner never fails; it hands these to the parser, which rejects them as
/// unexpected tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TokenKind {
    // Punctuators
    LCurly,
    RCurly,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    VarSign,
    DirSign,
    Ellipsis,
    Equals,
    Bang,
    Pipe,
    Amp,

    // Literals
    Int,
    Float,
    String,
    Identifier,

    // Keywords
    On,
    Fragment,
    True,
    False,
    Null,
    Query,
    Mutation,
    Subscription,
    Schema,
    Scalar,
    Type,
    Extend,
    Implements,
    Interface,
    Union,
    Enum,
    Input,
    Directive,
    Repeatable,

    // Lexical failures
    UnknownChar,
    BadUnicodeEscape,
}

impl TokenKind {
    /// Every keyword kind, in declaration order.
    pub const KEYWORDS: [TokenKind; 19] = [
        TokenKind::On,
        TokenKind::Fragment,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::Query,
        TokenKind::Mutation,
        TokenKind::Subscription,
        TokenKind::Schema,
        TokenKind::Scalar,
        TokenKind::Type,
        TokenKind::Extend,
        TokenKind::Implements,
        TokenKind::Interface,
        TokenKind::Union,
        TokenKind::Enum,
        TokenKind::Input,
        TokenKind::Directive,
        TokenKind::Repeatable,
    ];

    /// Maps a single punctuator byte to its kind. `.` is not included since
    /// only the three-byte `...` is a punctuator.
    pub fn from_punctuator_byte(byte: u8) -> Option<TokenKind> {
        Some(match byte {
            b'{' => TokenKind::LCurly,
            b'}' => TokenKind::RCurly,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b':' => TokenKind::Colon,
            b'$' => TokenKind::VarSign,
            b'@' => TokenKind::DirSign,
            b'=' => TokenKind::Equals,
            b'!' => TokenKind::Bang,
            b'|' => TokenKind::Pipe,
            b'&' => TokenKind::Amp,
            _ => return None,
        })
    }

    /// Returns the source text of a punctuator kind.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::VarSign => "$",
            TokenKind::DirSign => "@",
            TokenKind::Ellipsis => "...",
            TokenKind::Equals => "=",
            TokenKind::Bang => "!",
            TokenKind::Pipe => "|",
            TokenKind::Amp => "&",
            _ => return None,
        })
    }

    /// Returns the source text of a keyword kind.
    pub fn as_keyword_str(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::On => "on",
            TokenKind::Fragment => "fragment",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Query => "query",
            TokenKind::Mutation => "mutation",
            TokenKind::Subscription => "subscription",
            TokenKind::Schema => "schema",
            TokenKind::Scalar => "scalar",
            TokenKind::Type => "type",
            TokenKind::Extend => "extend",
            TokenKind::Implements => "implements",
            TokenKind::Interface => "interface",
            TokenKind::Union => "union",
            TokenKind::Enum => "enum",
            TokenKind::Input => "input",
            TokenKind::Directive => "directive",
            TokenKind::Repeatable => "repeatable",
            _ => return None,
        })
    }

    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    pub fn is_keyword(&self) -> bool {
        self.as_keyword_str().is_some()
    }

    /// Returns `true` for identifiers and keywords, i.e. every kind whose
    /// text matches `[_A-Za-z][_0-9A-Za-z]*`.
    pub fn is_name_like(&self) -> bool {
        matches!(self, TokenKind::Identifier) || self.is_keyword()
    }

    /// Returns `true` for `UnknownChar` and `BadUnicodeEscape`.
    pub fn is_lexical_error(&self) -> bool {
        matches!(self, TokenKind::UnknownChar | TokenKind::BadUnicodeEscape)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(punct) = self.as_punctuator_str() {
            return write!(f, "`{punct}`");
        }
        if let Some(keyword) = self.as_keyword_str() {
            return write!(f, "`{keyword}`");
        }
        f.write_str(match self {
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Identifier => "name",
            TokenKind::UnknownChar => "unknown character",
            _ => "invalid string",
        })
    }
}
