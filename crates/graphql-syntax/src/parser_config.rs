/// Options that adjust how a [`Parser`](crate::Parser) treats its input.
///
/// The default configuration imposes no limits.
///
/// ```rust
/// use graphql_syntax::ParserConfig;
///
/// let config = ParserConfig::default().with_max_depth(32);
/// assert_eq!(config.max_depth, Some(32));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParserConfig {
    /// Maximum nesting of selection sets, values and type annotations.
    /// `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
