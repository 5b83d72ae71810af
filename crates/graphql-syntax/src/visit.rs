//! The [`Visitor`] protocol.
//!
//! A visitor has one method per node kind. Every method defaults to
//! [`walk`], which visits the node's children in source order, so an
//! implementation only overrides the kinds it cares about. Call [`walk`]
//! from an override to keep descending, before or after the override's own
//! work.
//!
//! # Example
//!
//! ```rust
//! use graphql_syntax::ast::Field;
//! use graphql_syntax::visit::Visitor;
//! use graphql_syntax::visit::walk;
//!
//! #[derive(Default)]
//! struct FieldNames(Vec<String>);
//!
//! impl<'ast, 'src> Visitor<'ast, 'src> for FieldNames {
//!     fn visit_field(&mut self, field: &'ast Field<'src>) {
//!         self.0.push(field.name.to_string());
//!         walk(self, field.as_node());
//!     }
//! }
//!
//! let doc = graphql_syntax::parse("{ a { b } c }").unwrap();
//! let mut names = FieldNames::default();
//! doc.accept(&mut names);
//! assert_eq!(names.0, ["a", "b", "c"]);
//! ```

use crate::ast::*;

/// Visits every child of `node`, in source order.
pub fn walk<'ast, 'src, V>(visitor: &mut V, node: Node<'ast, 'src>)
where
    V: Visitor<'ast, 'src> + ?Sized,
{
    for child in node.children() {
        child.accept(visitor);
    }
}

pub trait Visitor<'ast, 'src> {
    fn visit_document(&mut self, node: &'ast Document<'src>) {
        walk(self, Node::Document(node));
    }

    fn visit_operation_definition(&mut self, node: &'ast OperationDefinition<'src>) {
        walk(self, Node::OperationDefinition(node));
    }

    fn visit_fragment_definition(&mut self, node: &'ast FragmentDefinition<'src>) {
        walk(self, Node::FragmentDefinition(node));
    }

    fn visit_field(&mut self, node: &'ast Field<'src>) {
        walk(self, Node::Field(node));
    }

    fn visit_fragment_spread(&mut self, node: &'ast FragmentSpread<'src>) {
        walk(self, Node::FragmentSpread(node));
    }

    fn visit_inline_fragment(&mut self, node: &'ast InlineFragment<'src>) {
        walk(self, Node::InlineFragment(node));
    }

    fn visit_variable(&mut self, node: &'ast Variable<'src>) {
        walk(self, Node::Variable(node));
    }

    fn visit_int_value(&mut self, node: &'ast IntValue<'src>) {
        walk(self, Node::IntValue(node));
    }

    fn visit_float_value(&mut self, node: &'ast FloatValue<'src>) {
        walk(self, Node::FloatValue(node));
    }

    fn visit_string_value(&mut self, node: &'ast StringValue<'src>) {
        walk(self, Node::StringValue(node));
    }

    // Leaves with no children.
    fn visit_boolean_value(&mut self, _node: &'ast BooleanValue) {}

    fn visit_null_value(&mut self, _node: &'ast NullValue) {}

    fn visit_enum_value(&mut self, node: &'ast EnumValue<'src>) {
        walk(self, Node::EnumValue(node));
    }

    fn visit_list_value(&mut self, node: &'ast ListValue<'src>) {
        walk(self, Node::ListValue(node));
    }

    fn visit_object_value(&mut self, node: &'ast ObjectValue<'src>) {
        walk(self, Node::ObjectValue(node));
    }

    fn visit_object_field(&mut self, node: &'ast ObjectField<'src>) {
        walk(self, Node::ObjectField(node));
    }

    fn visit_named_type(&mut self, node: &'ast NamedType<'src>) {
        walk(self, Node::NamedType(node));
    }

    fn visit_list_type(&mut self, node: &'ast ListType<'src>) {
        walk(self, Node::ListType(node));
    }

    fn visit_not_null_type(&mut self, node: &'ast NotNullType<'src>) {
        walk(self, Node::NotNullType(node));
    }

    fn visit_schema_definition(&mut self, node: &'ast SchemaDefinition<'src>) {
        walk(self, Node::SchemaDefinition(node));
    }

    fn visit_scalar_type_definition(&mut self, node: &'ast ScalarTypeDefinition<'src>) {
        walk(self, Node::ScalarTypeDefinition(node));
    }

    fn visit_object_type_definition(&mut self, node: &'ast ObjectTypeDefinition<'src>) {
        walk(self, Node::ObjectTypeDefinition(node));
    }

    fn visit_interface_type_definition(&mut self, node: &'ast InterfaceTypeDefinition<'src>) {
        walk(self, Node::InterfaceTypeDefinition(node));
    }

    fn visit_union_type_definition(&mut self, node: &'ast UnionTypeDefinition<'src>) {
        walk(self, Node::UnionTypeDefinition(node));
    }

    fn visit_enum_type_definition(&mut self, node: &'ast EnumTypeDefinition<'src>) {
        walk(self, Node::EnumTypeDefinition(node));
    }

    fn visit_input_object_type_definition(&mut self, node: &'ast InputObjectTypeDefinition<'src>) {
        walk(self, Node::InputObjectTypeDefinition(node));
    }

    fn visit_directive_definition(&mut self, node: &'ast DirectiveDefinition<'src>) {
        walk(self, Node::DirectiveDefinition(node));
    }

    fn visit_field_definition(&mut self, node: &'ast FieldDefinition<'src>) {
        walk(self, Node::FieldDefinition(node));
    }

    fn visit_input_value_definition(&mut self, node: &'ast InputValueDefinition<'src>) {
        walk(self, Node::InputValueDefinition(node));
    }

    fn visit_enum_value_definition(&mut self, node: &'ast EnumValueDefinition<'src>) {
        walk(self, Node::EnumValueDefinition(node));
    }

    fn visit_root_operation_type_definition(
        &mut self,
        node: &'ast RootOperationTypeDefinition<'src>,
    ) {
        walk(self, Node::RootOperationTypeDefinition(node));
    }

    fn visit_schema_extension(&mut self, node: &'ast SchemaExtension<'src>) {
        walk(self, Node::SchemaExtension(node));
    }

    fn visit_scalar_type_extension(&mut self, node: &'ast ScalarTypeExtension<'src>) {
        walk(self, Node::ScalarTypeExtension(node));
    }

    fn visit_object_type_extension(&mut self, node: &'ast ObjectTypeExtension<'src>) {
        walk(self, Node::ObjectTypeExtension(node));
    }

    fn visit_interface_type_extension(&mut self, node: &'ast InterfaceTypeExtension<'src>) {
        walk(self, Node::InterfaceTypeExtension(node));
    }

    fn visit_union_type_extension(&mut self, node: &'ast UnionTypeExtension<'src>) {
        walk(self, Node::UnionTypeExtension(node));
    }

    fn visit_enum_type_extension(&mut self, node: &'ast EnumTypeExtension<'src>) {
        walk(self, Node::EnumTypeExtension(node));
    }

    fn visit_input_object_type_extension(&mut self, node: &'ast InputObjectTypeExtension<'src>) {
        walk(self, Node::InputObjectTypeExtension(node));
    }

    fn visit_directive(&mut self, node: &'ast Directive<'src>) {
        walk(self, Node::Directive(node));
    }

    fn visit_argument(&mut self, node: &'ast Argument<'src>) {
        walk(self, Node::Argument(node));
    }

    fn visit_variable_definition(&mut self, node: &'ast VariableDefinition<'src>) {
        walk(self, Node::VariableDefinition(node));
    }

    fn visit_type_condition(&mut self, node: &'ast TypeCondition<'src>) {
        walk(self, Node::TypeCondition(node));
    }

    fn visit_executable_directive_location(
        &mut self,
        node: &'ast ExecutableDirectiveLocation<'src>,
    ) {
        walk(self, Node::ExecutableDirectiveLocation(node));
    }

    fn visit_type_system_directive_location(
        &mut self,
        node: &'ast TypeSystemDirectiveLocation<'src>,
    ) {
        walk(self, Node::TypeSystemDirectiveLocation(node));
    }
}
