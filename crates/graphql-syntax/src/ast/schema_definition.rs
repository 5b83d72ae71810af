use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;

/// `schema @directives { query: Query mutation: Mutation }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SchemaDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub directives: Vec<Directive<'src>>,
    pub root_operation_types: Vec<RootOperationTypeDefinition<'src>>,
    pub start: u32,
}

/// `extend schema @directives { ... }`; the braces are optional when
/// directives are present.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SchemaExtension<'src> {
    pub directives: Vec<Directive<'src>>,
    pub root_operation_types: Vec<RootOperationTypeDefinition<'src>>,
    pub start: u32,
}

/// `query: Query` inside a schema definition or extension.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RootOperationTypeDefinition<'src> {
    pub operation_type: OperationType,
    pub named_type: NamedType<'src>,
    pub start: u32,
}

impl_ast_node!(SchemaDefinition, SchemaExtension, RootOperationTypeDefinition);
