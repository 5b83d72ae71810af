//! Shared helpers for parser tests.

use crate::ParseError;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::TypeDefinition;

pub fn parse_ok(source: &str) -> Document<'_> {
    match crate::parse(source) {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

pub fn parse_err(source: &str) -> ParseError {
    match crate::parse(source) {
        Ok(doc) => panic!("expected {source:?} to fail, got {doc:?}"),
        Err(err) => err,
    }
}

pub fn only_operation<'a, 'src>(doc: &'a Document<'src>) -> &'a OperationDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        Definition::Operation(op) => op,
        other => panic!("expected an operation, got {other:?}"),
    }
}

pub fn only_fragment<'a, 'src>(doc: &'a Document<'src>) -> &'a FragmentDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        Definition::Fragment(fragment) => fragment,
        other => panic!("expected a fragment, got {other:?}"),
    }
}

pub fn only_type<'a, 'src>(doc: &'a Document<'src>) -> &'a TypeDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        Definition::Type(def) => def,
        other => panic!("expected a type definition, got {other:?}"),
    }
}

pub fn field_at<'a, 'src>(selections: &'a [Selection<'src>], index: usize) -> &'a Field<'src> {
    match &selections[index] {
        Selection::Field(field) => field,
        other => panic!("expected a field at {index}, got {other:?}"),
    }
}
