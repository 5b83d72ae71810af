use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Node;
use crate::ast::TypeCondition;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;

/// One entry of a selection set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

impl<'src> Selection<'src> {
    pub fn as_node<'ast>(&'ast self) -> Node<'ast, 'src> {
        match self {
            Selection::Field(field) => Node::Field(field),
            Selection::FragmentSpread(spread) => Node::FragmentSpread(spread),
            Selection::InlineFragment(inline) => Node::InlineFragment(inline),
        }
    }

    pub fn start(&self) -> u32 {
        self.as_node().start()
    }
}

/// A field selection, optionally aliased, with arguments, directives, and a
/// nested selection set.
///
/// `start` is the offset of the alias when there is one.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field<'src> {
    pub alias: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<Vec<Selection<'src>>>,
    pub start: u32,
}

impl Field<'_> {
    /// The key this field appears under in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentSpread<'src> {
    pub fragment_name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub start: u32,
}

/// `... on Type @directives { ... }`, where the type condition is optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Vec<Selection<'src>>,
    pub start: u32,
}

impl_ast_node!(Field, FragmentSpread, InlineFragment);
