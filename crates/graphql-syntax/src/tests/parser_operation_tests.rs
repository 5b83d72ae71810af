//! Tests for parsing executable documents: operations, fragments and
//! selections.

use crate::ast::Definition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::Type;
use crate::ast::Value;
use crate::tests::utils::field_at;
use crate::tests::utils::only_fragment;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_ok;

// =============================================================================
// Operations
// =============================================================================

#[test]
fn named_mutation_with_variables_and_directives() {
    let doc = parse_ok(
        "mutation aaron($neat: Int = 123) @foo(lol: { lon: 456 }) {\n}\n",
    );
    let op = only_operation(&doc);

    assert_eq!(op.operation_type, OperationType::Mutation);
    assert!(!op.shorthand);
    assert_eq!(op.name.as_deref(), Some("aaron"));
    assert!(op.selection_set.is_empty());

    assert_eq!(op.variable_definitions.len(), 1);
    let var_def = &op.variable_definitions[0];
    assert_eq!(var_def.variable.name, "neat");
    assert_eq!(var_def.var_type.to_string(), "Int");
    let Some(Value::Int(default)) = &var_def.default_value else {
        panic!("expected an int default, got {:?}", var_def.default_value);
    };
    assert_eq!(default.value, "123");

    assert_eq!(op.directives.len(), 1);
    assert_eq!(op.directives[0].name, "foo");

    let ints: Vec<&str> = doc
        .enumerate()
        .filter_map(|node| node.as_int_value())
        .map(|int| int.value.as_ref())
        .collect();
    assert_eq!(ints, ["123", "456"]);
}

#[test]
fn shorthand_query() {
    let doc = parse_ok("{ field }");
    let op = only_operation(&doc);

    assert_eq!(op.operation_type, OperationType::Query);
    assert!(op.shorthand);
    assert_eq!(op.name, None);
    assert!(op.variable_definitions.is_empty());
    assert!(op.directives.is_empty());

    let field = field_at(&op.selection_set, 0);
    assert_eq!(field.name, "field");
    assert_eq!(field.alias, None);
    assert_eq!(field.selection_set, None);
}

#[test]
fn anonymous_operations_of_each_type() {
    for (source, expected) in [
        ("query { a }", OperationType::Query),
        ("mutation { a }", OperationType::Mutation),
        ("subscription { a }", OperationType::Subscription),
    ] {
        let doc = parse_ok(source);
        let op = only_operation(&doc);
        assert_eq!(op.operation_type, expected, "{source}");
        assert_eq!(op.name, None, "{source}");
        assert!(!op.shorthand, "{source}");
    }
}

/// Keywords are contextual, so they are valid operation and field names.
#[test]
fn keywords_as_names() {
    let doc = parse_ok("query type { fragment query on: null }");
    let op = only_operation(&doc);
    assert_eq!(op.name.as_deref(), Some("type"));

    let names: Vec<&str> = doc
        .enumerate()
        .filter_map(|node| node.as_field())
        .map(|field| field.name.as_ref())
        .collect();
    assert_eq!(names, ["fragment", "query", "null"]);
    assert_eq!(field_at(&op.selection_set, 2).alias.as_deref(), Some("on"));
}

#[test]
fn multiple_variable_definitions() {
    let doc = parse_ok(
        "query Q($a: ID!, $b: [String] = [\"x\", \"y\"] @deprecated, $c: Input = { k: $a }) { f }",
    );
    let op = only_operation(&doc);
    let defs = &op.variable_definitions;
    assert_eq!(defs.len(), 3);

    assert!(matches!(defs[0].var_type, Type::NotNull(_)));
    assert_eq!(defs[0].default_value, None);

    assert!(matches!(defs[1].var_type, Type::List(_)));
    let Some(Value::List(list)) = &defs[1].default_value else {
        panic!("expected a list default");
    };
    assert_eq!(list.values.len(), 2);
    assert_eq!(defs[1].directives[0].name, "deprecated");

    let Some(Value::Object(object)) = &defs[2].default_value else {
        panic!("expected an object default");
    };
    assert_eq!(object.fields[0].name, "k");
    assert!(matches!(&object.fields[0].value, Value::Variable(v) if v.name == "a"));
}

#[test]
fn multiple_operations_in_source_order() {
    let doc = parse_ok("query A { a } mutation B { b } { c }");
    let names: Vec<Option<&str>> = doc
        .definitions
        .iter()
        .map(|def| match def {
            Definition::Operation(op) => op.name.as_deref(),
            other => panic!("expected an operation, got {other:?}"),
        })
        .collect();
    assert_eq!(names, [Some("A"), Some("B"), None]);
}

#[test]
fn empty_document() {
    assert!(parse_ok("").definitions.is_empty());
    assert!(parse_ok("  # only a comment\n,,").definitions.is_empty());
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn nested_fields_in_source_order() {
    let doc = parse_ok(
        "mutation {\n  likeStory(storyID: 12345) {\n    story {\n      likeCount\n    }\n  }\n}\n",
    );
    let names: Vec<&str> = doc
        .enumerate()
        .filter_map(|node| node.as_field())
        .map(|field| field.name.as_ref())
        .collect();
    assert_eq!(names, ["likeStory", "story", "likeCount"]);
}

#[test]
fn aliased_fields() {
    let doc = parse_ok("{ a: likeStory(storyID: 1) { b: story { c: likeCount } } plain }");
    let fields: Vec<(Option<&str>, &str)> = doc
        .enumerate()
        .filter_map(|node| node.as_field())
        .map(|field| (field.alias.as_deref(), field.name.as_ref()))
        .collect();
    assert_eq!(
        fields,
        [
            (Some("a"), "likeStory"),
            (Some("b"), "story"),
            (Some("c"), "likeCount"),
            (None, "plain"),
        ],
    );
}

#[test]
fn field_arguments_and_directives() {
    let doc = parse_ok(r#"{ user(id: 4, name: "x") @include(if: $show) @skip(if: false) { id } }"#);
    let op = only_operation(&doc);
    let field = field_at(&op.selection_set, 0);

    let args: Vec<&str> = field.arguments.iter().map(|arg| arg.name.as_ref()).collect();
    assert_eq!(args, ["id", "name"]);
    let directives: Vec<&str> = field.directives.iter().map(|d| d.name.as_ref()).collect();
    assert_eq!(directives, ["include", "skip"]);
    assert!(matches!(
        &field.directives[1].arguments[0].value,
        Value::Boolean(b) if !b.value
    ));
    assert_eq!(field.selection_set.as_ref().map(Vec::len), Some(1));
}

#[test]
fn all_value_kinds() {
    let doc = parse_ok(
        r#"{ f(i: -1, fl: 2.5e-3, s: "str", b: """blk""", t: true, n: null, e: RED, l: [], o: {}, v: $var) }"#,
    );
    let op = only_operation(&doc);
    let field = field_at(&op.selection_set, 0);
    let values: Vec<&Value<'_>> = field.arguments.iter().map(|arg| &arg.value).collect();

    assert!(matches!(values[0], Value::Int(v) if v.value == "-1"));
    assert!(matches!(values[1], Value::Float(v) if v.value == "2.5e-3"));
    assert!(matches!(values[2], Value::String(v) if v.value == "str" && !v.block));
    assert!(matches!(values[3], Value::String(v) if v.value == "blk" && v.block));
    assert!(matches!(values[4], Value::Boolean(v) if v.value));
    assert!(matches!(values[5], Value::Null(_)));
    assert!(matches!(values[6], Value::Enum(v) if v.value == "RED"));
    assert!(matches!(values[7], Value::List(v) if v.values.is_empty()));
    assert!(matches!(values[8], Value::Object(v) if v.fields.is_empty()));
    assert!(matches!(values[9], Value::Variable(v) if v.name == "var"));
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragment_definition() {
    let doc = parse_ok("fragment UserParts on User @dir { id ...More }");
    let fragment = only_fragment(&doc);

    assert_eq!(fragment.name, "UserParts");
    assert_eq!(fragment.type_condition.named_type.name, "User");
    assert_eq!(fragment.directives[0].name, "dir");
    assert_eq!(fragment.selection_set.len(), 2);
    let Selection::FragmentSpread(spread) = &fragment.selection_set[1] else {
        panic!("expected a fragment spread");
    };
    assert_eq!(spread.fragment_name, "More");
}

#[test]
fn fragment_spreads_and_inline_fragments() {
    let doc = parse_ok(
        "{ ...Named @d ... on User { id } ... @include(if: true) { name } ... { age } }",
    );
    let op = only_operation(&doc);
    let selections = &op.selection_set;
    assert_eq!(selections.len(), 4);

    let Selection::FragmentSpread(spread) = &selections[0] else {
        panic!("expected a fragment spread");
    };
    assert_eq!(spread.fragment_name, "Named");
    assert_eq!(spread.directives.len(), 1);

    let Selection::InlineFragment(typed) = &selections[1] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(
        typed.type_condition.as_ref().map(|tc| tc.named_type.name.as_ref()),
        Some("User"),
    );

    let Selection::InlineFragment(directed) = &selections[2] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(directed.type_condition, None);
    assert_eq!(directed.directives[0].name, "include");

    let Selection::InlineFragment(bare) = &selections[3] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(bare.type_condition, None);
    assert!(bare.directives.is_empty());
    assert_eq!(field_at(&bare.selection_set, 0).name, "age");
}

/// A spread of a fragment whose name happens to be a keyword.
#[test]
fn fragment_spread_with_keyword_name() {
    let doc = parse_ok("{ ...type }");
    let op = only_operation(&doc);
    assert!(matches!(
        &op.selection_set[0],
        Selection::FragmentSpread(spread) if spread.fragment_name == "type"
    ));
}

#[test]
fn executable_predicates() {
    let doc = parse_ok("query { a } fragment F on T { b }");
    assert!(doc.definitions.iter().all(|def| def.is_executable_definition()));
    assert!(!doc.definitions.iter().any(|def| def.is_type_system_definition()));
    assert!(!doc.definitions.iter().any(|def| def.is_type_system_extension()));
}

#[test]
fn parse_bytes_accepts_utf8() {
    let doc = crate::parse_bytes("{ caf\u{e9}: name }".as_bytes());
    // `é` is not a name character, so the alias is cut short.
    assert!(doc.is_err());

    let doc = crate::parse_bytes(b"{ name }").unwrap();
    assert_eq!(doc.definitions.len(), 1);
}
