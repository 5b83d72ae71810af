use crate::ast::Directive;
use crate::ast::Selection;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;
use std::fmt;

/// The kind of an operation. The query shorthand `{ ... }` is a `Query`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation: `query Name($var: Type) @dir { ... }` or the anonymous
/// shorthand `{ ... }`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDefinition<'src> {
    pub operation_type: OperationType,
    /// `true` for the `{ ... }` form, which has no keyword, name, variables
    /// or directives.
    pub shorthand: bool,
    pub name: Option<Cow<'src, str>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Vec<Selection<'src>>,
    pub start: u32,
}

/// `$name: Type = default @directives` inside an operation's parentheses.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub var_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub start: u32,
}

impl_ast_node!(OperationDefinition, VariableDefinition);
