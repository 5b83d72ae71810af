//! Tests for [`crate::ast::Node`]: enumeration order, categories and
//! positions.

use crate::ast::Definition;
use crate::ast::Node;
use crate::ast::NodeKind;

fn kinds(source: &str) -> Vec<NodeKind> {
    let doc = crate::parse(source).unwrap();
    doc.enumerate().map(|node| node.kind()).collect()
}

// =============================================================================
// Enumeration
// =============================================================================

/// Enumeration is pre-order and starts with the node itself.
#[test]
fn enumerate_is_pre_order() {
    assert_eq!(
        kinds("mutation { likeStory(storyID: 123) { story { id } } }"),
        [
            NodeKind::Document,
            NodeKind::OperationDefinition,
            NodeKind::Field,
            NodeKind::Argument,
            NodeKind::IntValue,
            NodeKind::Field,
            NodeKind::Field,
        ],
    );
}

/// Variable definitions enumerate the variable, then the type from the
/// outside in, then the default value.
#[test]
fn enumerate_variable_definition() {
    assert_eq!(
        kinds("query ($ids: [Int!] = [1]) { f }"),
        [
            NodeKind::Document,
            NodeKind::OperationDefinition,
            NodeKind::VariableDefinition,
            NodeKind::Variable,
            NodeKind::ListType,
            NodeKind::NotNullType,
            NodeKind::NamedType,
            NodeKind::ListValue,
            NodeKind::IntValue,
            NodeKind::Field,
        ],
    );
}

/// List and object values are traversed into.
#[test]
fn enumerate_nested_values() {
    assert_eq!(
        kinds("{ f(a: [{ b: null }, ENUM]) }"),
        [
            NodeKind::Document,
            NodeKind::OperationDefinition,
            NodeKind::Field,
            NodeKind::Argument,
            NodeKind::ListValue,
            NodeKind::ObjectValue,
            NodeKind::ObjectField,
            NodeKind::NullValue,
            NodeKind::EnumValue,
        ],
    );
}

/// Enumerating from an inner node only yields that subtree.
#[test]
fn enumerate_from_inner_node() {
    let doc = crate::parse("{ a { b c } d }").unwrap();
    let Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    let names: Vec<&str> = op.selection_set[0]
        .as_node()
        .enumerate()
        .filter_map(|node| node.as_field())
        .map(|field| field.name.as_ref())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

/// Each call returns a fresh iterator.
#[test]
fn enumerate_is_restartable() {
    let doc = crate::parse("{ a b }").unwrap();
    assert_eq!(doc.enumerate().count(), 4);
    assert_eq!(doc.enumerate().count(), 4);
}

/// Type-system nodes enumerate descriptions-free children in source order.
#[test]
fn enumerate_type_system_definitions() {
    assert_eq!(
        kinds(r#""Doc" type T implements I @d { "field" f(x: Int = 1): [T] }"#),
        [
            NodeKind::Document,
            NodeKind::ObjectTypeDefinition,
            NodeKind::NamedType,
            NodeKind::Directive,
            NodeKind::FieldDefinition,
            NodeKind::InputValueDefinition,
            NodeKind::NamedType,
            NodeKind::IntValue,
            NodeKind::ListType,
            NodeKind::NamedType,
        ],
    );
    assert_eq!(
        kinds("directive @d(a: Int) repeatable on FIELD | OBJECT"),
        [
            NodeKind::Document,
            NodeKind::DirectiveDefinition,
            NodeKind::InputValueDefinition,
            NodeKind::NamedType,
            NodeKind::ExecutableDirectiveLocation,
            NodeKind::TypeSystemDirectiveLocation,
        ],
    );
}

// =============================================================================
// Categories and accessors
// =============================================================================

#[test]
fn definition_categories() {
    let doc = crate::parse(
        "query Q { a } fragment F on T { b } type T { a: Int } \
         extend type T { c: Int } schema { query: Q } extend schema @d",
    )
    .unwrap();

    let nodes: Vec<Node<'_, '_>> = doc.definitions.iter().map(|def| def.as_node()).collect();
    let executable: Vec<bool> = nodes.iter().map(|n| n.is_executable_definition()).collect();
    let type_system: Vec<bool> = nodes.iter().map(|n| n.is_type_system_definition()).collect();
    let extension: Vec<bool> = nodes.iter().map(|n| n.is_type_system_extension()).collect();

    assert_eq!(executable, [true, true, false, false, false, false]);
    assert_eq!(type_system, [false, false, true, false, true, false]);
    assert_eq!(extension, [false, false, false, true, false, true]);

    assert_eq!(doc.executable_definitions().count(), 2);
    assert_eq!(doc.type_system_definitions().count(), 2);
    assert_eq!(doc.type_system_extensions().count(), 2);
}

#[test]
fn node_accessors() {
    let doc = crate::parse("query Q { a(n: 7) }").unwrap();
    let nodes: Vec<Node<'_, '_>> = doc.enumerate().collect();

    assert!(nodes[0].as_operation_definition().is_none());
    let op = nodes[1].as_operation_definition().unwrap();
    assert_eq!(op.name.as_deref(), Some("Q"));
    assert_eq!(nodes[2].as_field().map(|f| f.name.as_ref()), Some("a"));
    assert_eq!(nodes[4].as_int_value().map(|v| v.value.as_ref()), Some("7"));
    assert!(nodes[4].is_value());
    assert!(!nodes[3].is_value());
}

#[test]
fn node_kind_display() {
    assert_eq!(NodeKind::OperationDefinition.to_string(), "OperationDefinition");
    assert_eq!(NodeKind::Field.as_str(), "Field");
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn start_offsets() {
    let source = "query Q {\n  alias: name\n}";
    let doc = crate::parse(source).unwrap();
    let offsets: Vec<u32> = doc.enumerate().map(|node| node.start()).collect();
    // Document and operation start at `query`; the field starts at its alias.
    assert_eq!(offsets, [0, 0, 12]);
}

#[test]
fn lines_are_one_based() {
    let source = "query A { a }\n\nquery B {\n  b\n}";
    let doc = crate::parse(source).unwrap();
    let lines: Vec<usize> = doc.enumerate().map(|node| node.line(source)).collect();
    assert_eq!(lines, [1, 1, 1, 3, 4]);
    assert_eq!(doc.line(source), 1);
}
