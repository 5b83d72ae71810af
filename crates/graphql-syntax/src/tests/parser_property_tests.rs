//! Property-based tests for [`crate::Parser`].

use crate::Parser;
use crate::ParserConfig;
use proptest::prelude::*;

proptest! {
    /// Parsing arbitrary text never panics; it either succeeds or reports an
    /// error with a line inside the input.
    #[test]
    fn parser_never_panics(source in "\\PC{0,64}") {
        if let Err(err) = crate::parse(&source) {
            let lines = source.matches('\n').count() + 1;
            prop_assert!(err.line().is_some_and(|line| line >= 1 && line <= lines));
        }
    }

    /// The same holds for token soup assembled from GraphQL punctuation and
    /// keywords, which gets much deeper into the grammar.
    #[test]
    fn parser_never_panics_on_graphql_like_input(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "{", "}", "(", ")", "[", "]", ":", "$", "@", "...", "=", "!", "|", "&",
                " a", " on", " query", " type", " implements", " 1", " \"s\"", " \"\"\"b\"\"\"",
                " fragment", " schema", " extend", " directive", " FIELD", " true",
            ]),
            0..32,
        ),
    ) {
        let source: String = parts.concat();
        let config = ParserConfig::default().with_max_depth(16);
        let _ = Parser::with_config(&source, config).parse();
    }

    /// Shorthand queries built from arbitrary field names always parse, and
    /// keep every field in order.
    #[test]
    fn shorthand_queries_keep_field_order(
        names in prop::collection::vec("[_A-Za-z][_0-9A-Za-z]{0,8}", 1..8),
    ) {
        let source = format!("{{ {} }}", names.join(" "));
        let doc = crate::parse(&source).unwrap();
        let parsed: Vec<String> = doc
            .enumerate()
            .filter_map(|node| node.as_field())
            .map(|field| field.name.to_string())
            .collect();
        prop_assert_eq!(parsed, names);
    }
}
