use crate::ast::Node;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;
use std::fmt;

/// A type reference such as `String`, `[ID!]` or `Int!`.
///
/// Non-null is a suffix wrapper around a named or list type, so
/// `NotNull(NotNull(_))` never comes out of the parser.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
    NotNull(NotNullType<'src>),
}

impl<'src> Type<'src> {
    pub fn as_node<'ast>(&'ast self) -> Node<'ast, 'src> {
        match self {
            Type::Named(named) => Node::NamedType(named),
            Type::List(list) => Node::ListType(list),
            Type::NotNull(not_null) => Node::NotNullType(not_null),
        }
    }

    pub fn start(&self) -> u32 {
        self.as_node().start()
    }

    /// The named type at the core of any list/non-null wrapping.
    pub fn innermost_named_type(&self) -> &NamedType<'src> {
        match self {
            Type::Named(named) => named,
            Type::List(list) => list.inner.innermost_named_type(),
            Type::NotNull(not_null) => not_null.inner.innermost_named_type(),
        }
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(named) => f.write_str(&named.name),
            Type::List(list) => write!(f, "[{}]", list.inner),
            Type::NotNull(not_null) => write!(f, "{}!", not_null.inner),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NamedType<'src> {
    pub name: Cow<'src, str>,
    pub start: u32,
}

/// `[inner]`, starting at the `[`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListType<'src> {
    pub inner: Box<Type<'src>>,
    pub start: u32,
}

/// `inner!`, starting where `inner` starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NotNullType<'src> {
    pub inner: Box<Type<'src>>,
    pub start: u32,
}

impl_ast_node!(NamedType, ListType, NotNullType);
