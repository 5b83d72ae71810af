use crate::ast::Value;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;

/// A directive annotation: `@name(arg: value)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Directive<'src> {
    pub name: Cow<'src, str>,
    pub arguments: Vec<Argument<'src>>,
    pub start: u32,
}

/// `name: value` inside a field's or directive's parentheses.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Argument<'src> {
    pub name: Cow<'src, str>,
    pub value: Value<'src>,
    pub start: u32,
}

impl_ast_node!(Directive, Argument);
