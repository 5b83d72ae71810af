//! The [`Fold`] protocol.
//!
//! Structurally identical to [`Visitor`](crate::visit::Visitor), but every
//! method threads an accumulator: it receives the current value and returns
//! the next one. The default for every kind is [`walk`], which folds the
//! node's children left to right.
//!
//! # Example
//!
//! ```rust
//! use graphql_syntax::ast::IntValue;
//! use graphql_syntax::fold::Fold;
//!
//! struct SumInts;
//!
//! impl<'ast, 'src> Fold<'ast, 'src> for SumInts {
//!     type Acc = i64;
//!
//!     fn fold_int_value(&mut self, node: &'ast IntValue<'src>, acc: i64) -> i64 {
//!         acc + node.as_i64().unwrap_or(0)
//!     }
//! }
//!
//! let doc = graphql_syntax::parse("{ a(x: 1, y: [2, 3]) }").unwrap();
//! assert_eq!(doc.fold(&mut SumInts, 0), 6);
//! ```

use crate::ast::*;

/// Folds every child of `node` left to right, passing each result on to
/// the next child.
pub fn walk<'ast, 'src, F>(folder: &mut F, node: Node<'ast, 'src>, acc: F::Acc) -> F::Acc
where
    F: Fold<'ast, 'src> + ?Sized,
{
    node.children()
        .into_iter()
        .fold(acc, |acc, child| child.fold(folder, acc))
}

pub trait Fold<'ast, 'src> {
    type Acc;

    fn fold_document(&mut self, node: &'ast Document<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::Document(node), acc)
    }

    fn fold_operation_definition(
        &mut self,
        node: &'ast OperationDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::OperationDefinition(node), acc)
    }

    fn fold_fragment_definition(
        &mut self,
        node: &'ast FragmentDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::FragmentDefinition(node), acc)
    }

    fn fold_field(&mut self, node: &'ast Field<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::Field(node), acc)
    }

    fn fold_fragment_spread(
        &mut self,
        node: &'ast FragmentSpread<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::FragmentSpread(node), acc)
    }

    fn fold_inline_fragment(
        &mut self,
        node: &'ast InlineFragment<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::InlineFragment(node), acc)
    }

    fn fold_variable(&mut self, node: &'ast Variable<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::Variable(node), acc)
    }

    fn fold_int_value(&mut self, node: &'ast IntValue<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::IntValue(node), acc)
    }

    fn fold_float_value(&mut self, node: &'ast FloatValue<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::FloatValue(node), acc)
    }

    fn fold_string_value(&mut self, node: &'ast StringValue<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::StringValue(node), acc)
    }

    // Leaves with no children.
    fn fold_boolean_value(&mut self, _node: &'ast BooleanValue, acc: Self::Acc) -> Self::Acc {
        acc
    }

    fn fold_null_value(&mut self, _node: &'ast NullValue, acc: Self::Acc) -> Self::Acc {
        acc
    }

    fn fold_enum_value(&mut self, node: &'ast EnumValue<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::EnumValue(node), acc)
    }

    fn fold_list_value(&mut self, node: &'ast ListValue<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::ListValue(node), acc)
    }

    fn fold_object_value(&mut self, node: &'ast ObjectValue<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::ObjectValue(node), acc)
    }

    fn fold_object_field(&mut self, node: &'ast ObjectField<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::ObjectField(node), acc)
    }

    fn fold_named_type(&mut self, node: &'ast NamedType<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::NamedType(node), acc)
    }

    fn fold_list_type(&mut self, node: &'ast ListType<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::ListType(node), acc)
    }

    fn fold_not_null_type(&mut self, node: &'ast NotNullType<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::NotNullType(node), acc)
    }

    fn fold_schema_definition(
        &mut self,
        node: &'ast SchemaDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::SchemaDefinition(node), acc)
    }

    fn fold_scalar_type_definition(
        &mut self,
        node: &'ast ScalarTypeDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::ScalarTypeDefinition(node), acc)
    }

    fn fold_object_type_definition(
        &mut self,
        node: &'ast ObjectTypeDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::ObjectTypeDefinition(node), acc)
    }

    fn fold_interface_type_definition(
        &mut self,
        node: &'ast InterfaceTypeDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::InterfaceTypeDefinition(node), acc)
    }

    fn fold_union_type_definition(
        &mut self,
        node: &'ast UnionTypeDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::UnionTypeDefinition(node), acc)
    }

    fn fold_enum_type_definition(
        &mut self,
        node: &'ast EnumTypeDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::EnumTypeDefinition(node), acc)
    }

    fn fold_input_object_type_definition(
        &mut self,
        node: &'ast InputObjectTypeDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::InputObjectTypeDefinition(node), acc)
    }

    fn fold_directive_definition(
        &mut self,
        node: &'ast DirectiveDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::DirectiveDefinition(node), acc)
    }

    fn fold_field_definition(
        &mut self,
        node: &'ast FieldDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::FieldDefinition(node), acc)
    }

    fn fold_input_value_definition(
        &mut self,
        node: &'ast InputValueDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::InputValueDefinition(node), acc)
    }

    fn fold_enum_value_definition(
        &mut self,
        node: &'ast EnumValueDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::EnumValueDefinition(node), acc)
    }

    fn fold_root_operation_type_definition(
        &mut self,
        node: &'ast RootOperationTypeDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::RootOperationTypeDefinition(node), acc)
    }

    fn fold_schema_extension(
        &mut self,
        node: &'ast SchemaExtension<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::SchemaExtension(node), acc)
    }

    fn fold_scalar_type_extension(
        &mut self,
        node: &'ast ScalarTypeExtension<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::ScalarTypeExtension(node), acc)
    }

    fn fold_object_type_extension(
        &mut self,
        node: &'ast ObjectTypeExtension<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::ObjectTypeExtension(node), acc)
    }

    fn fold_interface_type_extension(
        &mut self,
        node: &'ast InterfaceTypeExtension<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::InterfaceTypeExtension(node), acc)
    }

    fn fold_union_type_extension(
        &mut self,
        node: &'ast UnionTypeExtension<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::UnionTypeExtension(node), acc)
    }

    fn fold_enum_type_extension(
        &mut self,
        node: &'ast EnumTypeExtension<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::EnumTypeExtension(node), acc)
    }

    fn fold_input_object_type_extension(
        &mut self,
        node: &'ast InputObjectTypeExtension<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::InputObjectTypeExtension(node), acc)
    }

    fn fold_directive(&mut self, node: &'ast Directive<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::Directive(node), acc)
    }

    fn fold_argument(&mut self, node: &'ast Argument<'src>, acc: Self::Acc) -> Self::Acc {
        walk(self, Node::Argument(node), acc)
    }

    fn fold_variable_definition(
        &mut self,
        node: &'ast VariableDefinition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::VariableDefinition(node), acc)
    }

    fn fold_type_condition(
        &mut self,
        node: &'ast TypeCondition<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::TypeCondition(node), acc)
    }

    fn fold_executable_directive_location(
        &mut self,
        node: &'ast ExecutableDirectiveLocation<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::ExecutableDirectiveLocation(node), acc)
    }

    fn fold_type_system_directive_location(
        &mut self,
        node: &'ast TypeSystemDirectiveLocation<'src>,
        acc: Self::Acc,
    ) -> Self::Acc {
        walk(self, Node::TypeSystemDirectiveLocation(node), acc)
    }
}
