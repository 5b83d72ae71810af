use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::Selection;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;

/// `fragment Name on Type @directives { ... }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentDefinition<'src> {
    pub name: Cow<'src, str>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Vec<Selection<'src>>,
    pub start: u32,
}

/// `on Type`, starting at the `on` keyword.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TypeCondition<'src> {
    pub named_type: NamedType<'src>,
    pub start: u32,
}

impl_ast_node!(FragmentDefinition, TypeCondition);
