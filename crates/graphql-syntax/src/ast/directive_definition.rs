use crate::ast::InputValueDefinition;
use crate::ast::Node;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;

/// `directive @name(args) repeatable on LOCATION | LOCATION`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation<'src>>,
    pub start: u32,
}

/// Names accepted as executable directive locations.
pub const EXECUTABLE_DIRECTIVE_LOCATIONS: [&str; 8] = [
    "QUERY",
    "MUTATION",
    "SUBSCRIPTION",
    "FIELD",
    "FRAGMENT_DEFINITION",
    "FRAGMENT_SPREAD",
    "INLINE_FRAGMENT",
    "VARIABLE_DEFINITION",
];

/// Names accepted as type-system directive locations.
pub const TYPE_SYSTEM_DIRECTIVE_LOCATIONS: [&str; 11] = [
    "SCHEMA",
    "SCALAR",
    "OBJECT",
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INTERFACE",
    "UNION",
    "ENUM",
    "ENUM_VALUE",
    "INPUT_OBJECT",
    "INPUT_FIELD_DEFINITION",
];

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DirectiveLocation<'src> {
    Executable(ExecutableDirectiveLocation<'src>),
    TypeSystem(TypeSystemDirectiveLocation<'src>),
}

impl<'src> DirectiveLocation<'src> {
    pub fn as_node<'ast>(&'ast self) -> Node<'ast, 'src> {
        match self {
            DirectiveLocation::Executable(loc) => Node::ExecutableDirectiveLocation(loc),
            DirectiveLocation::TypeSystem(loc) => Node::TypeSystemDirectiveLocation(loc),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DirectiveLocation::Executable(loc) => &loc.name,
            DirectiveLocation::TypeSystem(loc) => &loc.name,
        }
    }
}

/// One of [`EXECUTABLE_DIRECTIVE_LOCATIONS`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExecutableDirectiveLocation<'src> {
    pub name: Cow<'src, str>,
    pub start: u32,
}

/// One of [`TYPE_SYSTEM_DIRECTIVE_LOCATIONS`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TypeSystemDirectiveLocation<'src> {
    pub name: Cow<'src, str>,
    pub start: u32,
}

impl_ast_node!(DirectiveDefinition, ExecutableDirectiveLocation, TypeSystemDirectiveLocation);
