//! Uniform, borrowed view of any AST node.
//!
//! [`Node`] is the single dispatch point for traversal: enumeration, the
//! [`Visitor`] protocol and the [`Fold`] protocol all go through
//! [`Node::children`], so they agree on which nodes exist and in what order.

use crate::ast::*;
use crate::fold::Fold;
use crate::visit::Visitor;
use smallvec::SmallVec;
use std::fmt;

/// A borrowed reference to one AST node of any kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Node<'ast, 'src> {
    Document(&'ast Document<'src>),
    OperationDefinition(&'ast OperationDefinition<'src>),
    FragmentDefinition(&'ast FragmentDefinition<'src>),
    Field(&'ast Field<'src>),
    FragmentSpread(&'ast FragmentSpread<'src>),
    InlineFragment(&'ast InlineFragment<'src>),
    Variable(&'ast Variable<'src>),
    IntValue(&'ast IntValue<'src>),
    FloatValue(&'ast FloatValue<'src>),
    StringValue(&'ast StringValue<'src>),
    BooleanValue(&'ast BooleanValue),
    NullValue(&'ast NullValue),
    EnumValue(&'ast EnumValue<'src>),
    ListValue(&'ast ListValue<'src>),
    ObjectValue(&'ast ObjectValue<'src>),
    ObjectField(&'ast ObjectField<'src>),
    NamedType(&'ast NamedType<'src>),
    ListType(&'ast ListType<'src>),
    NotNullType(&'ast NotNullType<'src>),
    SchemaDefinition(&'ast SchemaDefinition<'src>),
    ScalarTypeDefinition(&'ast ScalarTypeDefinition<'src>),
    ObjectTypeDefinition(&'ast ObjectTypeDefinition<'src>),
    InterfaceTypeDefinition(&'ast InterfaceTypeDefinition<'src>),
    UnionTypeDefinition(&'ast UnionTypeDefinition<'src>),
    EnumTypeDefinition(&'ast EnumTypeDefinition<'src>),
    InputObjectTypeDefinition(&'ast InputObjectTypeDefinition<'src>),
    DirectiveDefinition(&'ast DirectiveDefinition<'src>),
    FieldDefinition(&'ast FieldDefinition<'src>),
    InputValueDefinition(&'ast InputValueDefinition<'src>),
    EnumValueDefinition(&'ast EnumValueDefinition<'src>),
    RootOperationTypeDefinition(&'ast RootOperationTypeDefinition<'src>),
    SchemaExtension(&'ast SchemaExtension<'src>),
    ScalarTypeExtension(&'ast ScalarTypeExtension<'src>),
    ObjectTypeExtension(&'ast ObjectTypeExtension<'src>),
    InterfaceTypeExtension(&'ast InterfaceTypeExtension<'src>),
    UnionTypeExtension(&'ast UnionTypeExtension<'src>),
    EnumTypeExtension(&'ast EnumTypeExtension<'src>),
    InputObjectTypeExtension(&'ast InputObjectTypeExtension<'src>),
    Directive(&'ast Directive<'src>),
    Argument(&'ast Argument<'src>),
    VariableDefinition(&'ast VariableDefinition<'src>),
    TypeCondition(&'ast TypeCondition<'src>),
    ExecutableDirectiveLocation(&'ast ExecutableDirectiveLocation<'src>),
    TypeSystemDirectiveLocation(&'ast TypeSystemDirectiveLocation<'src>),
}

/// The kind of a [`Node`], without the borrowed data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum NodeKind {
    Document,
    OperationDefinition,
    FragmentDefinition,
    Field,
    FragmentSpread,
    InlineFragment,
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    NamedType,
    ListType,
    NotNullType,
    SchemaDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
    RootOperationTypeDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
    Directive,
    Argument,
    VariableDefinition,
    TypeCondition,
    ExecutableDirectiveLocation,
    TypeSystemDirectiveLocation,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::OperationDefinition => "OperationDefinition",
            NodeKind::FragmentDefinition => "FragmentDefinition",
            NodeKind::Field => "Field",
            NodeKind::FragmentSpread => "FragmentSpread",
            NodeKind::InlineFragment => "InlineFragment",
            NodeKind::Variable => "Variable",
            NodeKind::IntValue => "IntValue",
            NodeKind::FloatValue => "FloatValue",
            NodeKind::StringValue => "StringValue",
            NodeKind::BooleanValue => "BooleanValue",
            NodeKind::NullValue => "NullValue",
            NodeKind::EnumValue => "EnumValue",
            NodeKind::ListValue => "ListValue",
            NodeKind::ObjectValue => "ObjectValue",
            NodeKind::ObjectField => "ObjectField",
            NodeKind::NamedType => "NamedType",
            NodeKind::ListType => "ListType",
            NodeKind::NotNullType => "NotNullType",
            NodeKind::SchemaDefinition => "SchemaDefinition",
            NodeKind::ScalarTypeDefinition => "ScalarTypeDefinition",
            NodeKind::ObjectTypeDefinition => "ObjectTypeDefinition",
            NodeKind::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            NodeKind::UnionTypeDefinition => "UnionTypeDefinition",
            NodeKind::EnumTypeDefinition => "EnumTypeDefinition",
            NodeKind::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            NodeKind::DirectiveDefinition => "DirectiveDefinition",
            NodeKind::FieldDefinition => "FieldDefinition",
            NodeKind::InputValueDefinition => "InputValueDefinition",
            NodeKind::EnumValueDefinition => "EnumValueDefinition",
            NodeKind::RootOperationTypeDefinition => "RootOperationTypeDefinition",
            NodeKind::SchemaExtension => "SchemaExtension",
            NodeKind::ScalarTypeExtension => "ScalarTypeExtension",
            NodeKind::ObjectTypeExtension => "ObjectTypeExtension",
            NodeKind::InterfaceTypeExtension => "InterfaceTypeExtension",
            NodeKind::UnionTypeExtension => "UnionTypeExtension",
            NodeKind::EnumTypeExtension => "EnumTypeExtension",
            NodeKind::InputObjectTypeExtension => "InputObjectTypeExtension",
            NodeKind::Directive => "Directive",
            NodeKind::Argument => "Argument",
            NodeKind::VariableDefinition => "VariableDefinition",
            NodeKind::TypeCondition => "TypeCondition",
            NodeKind::ExecutableDirectiveLocation => "ExecutableDirectiveLocation",
            NodeKind::TypeSystemDirectiveLocation => "TypeSystemDirectiveLocation",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direct children of a node. Most nodes have few enough to stay inline.
pub type Children<'ast, 'src> = SmallVec<[Node<'ast, 'src>; 8]>;

impl<'ast, 'src> Node<'ast, 'src> {
    pub fn kind(self) -> NodeKind {
        match self {
            Node::Document(_) => NodeKind::Document,
            Node::OperationDefinition(_) => NodeKind::OperationDefinition,
            Node::FragmentDefinition(_) => NodeKind::FragmentDefinition,
            Node::Field(_) => NodeKind::Field,
            Node::FragmentSpread(_) => NodeKind::FragmentSpread,
            Node::InlineFragment(_) => NodeKind::InlineFragment,
            Node::Variable(_) => NodeKind::Variable,
            Node::IntValue(_) => NodeKind::IntValue,
            Node::FloatValue(_) => NodeKind::FloatValue,
            Node::StringValue(_) => NodeKind::StringValue,
            Node::BooleanValue(_) => NodeKind::BooleanValue,
            Node::NullValue(_) => NodeKind::NullValue,
            Node::EnumValue(_) => NodeKind::EnumValue,
            Node::ListValue(_) => NodeKind::ListValue,
            Node::ObjectValue(_) => NodeKind::ObjectValue,
            Node::ObjectField(_) => NodeKind::ObjectField,
            Node::NamedType(_) => NodeKind::NamedType,
            Node::ListType(_) => NodeKind::ListType,
            Node::NotNullType(_) => NodeKind::NotNullType,
            Node::SchemaDefinition(_) => NodeKind::SchemaDefinition,
            Node::ScalarTypeDefinition(_) => NodeKind::ScalarTypeDefinition,
            Node::ObjectTypeDefinition(_) => NodeKind::ObjectTypeDefinition,
            Node::InterfaceTypeDefinition(_) => NodeKind::InterfaceTypeDefinition,
            Node::UnionTypeDefinition(_) => NodeKind::UnionTypeDefinition,
            Node::EnumTypeDefinition(_) => NodeKind::EnumTypeDefinition,
            Node::InputObjectTypeDefinition(_) => NodeKind::InputObjectTypeDefinition,
            Node::DirectiveDefinition(_) => NodeKind::DirectiveDefinition,
            Node::FieldDefinition(_) => NodeKind::FieldDefinition,
            Node::InputValueDefinition(_) => NodeKind::InputValueDefinition,
            Node::EnumValueDefinition(_) => NodeKind::EnumValueDefinition,
            Node::RootOperationTypeDefinition(_) => NodeKind::RootOperationTypeDefinition,
            Node::SchemaExtension(_) => NodeKind::SchemaExtension,
            Node::ScalarTypeExtension(_) => NodeKind::ScalarTypeExtension,
            Node::ObjectTypeExtension(_) => NodeKind::ObjectTypeExtension,
            Node::InterfaceTypeExtension(_) => NodeKind::InterfaceTypeExtension,
            Node::UnionTypeExtension(_) => NodeKind::UnionTypeExtension,
            Node::EnumTypeExtension(_) => NodeKind::EnumTypeExtension,
            Node::InputObjectTypeExtension(_) => NodeKind::InputObjectTypeExtension,
            Node::Directive(_) => NodeKind::Directive,
            Node::Argument(_) => NodeKind::Argument,
            Node::VariableDefinition(_) => NodeKind::VariableDefinition,
            Node::TypeCondition(_) => NodeKind::TypeCondition,
            Node::ExecutableDirectiveLocation(_) => NodeKind::ExecutableDirectiveLocation,
            Node::TypeSystemDirectiveLocation(_) => NodeKind::TypeSystemDirectiveLocation,
        }
    }

    /// Byte offset of the node's first token.
    pub fn start(self) -> u32 {
        match self {
            Node::Document(node) => node.start,
            Node::OperationDefinition(node) => node.start,
            Node::FragmentDefinition(node) => node.start,
            Node::Field(node) => node.start,
            Node::FragmentSpread(node) => node.start,
            Node::InlineFragment(node) => node.start,
            Node::Variable(node) => node.start,
            Node::IntValue(node) => node.start,
            Node::FloatValue(node) => node.start,
            Node::StringValue(node) => node.start,
            Node::BooleanValue(node) => node.start,
            Node::NullValue(node) => node.start,
            Node::EnumValue(node) => node.start,
            Node::ListValue(node) => node.start,
            Node::ObjectValue(node) => node.start,
            Node::ObjectField(node) => node.start,
            Node::NamedType(node) => node.start,
            Node::ListType(node) => node.start,
            Node::NotNullType(node) => node.start,
            Node::SchemaDefinition(node) => node.start,
            Node::ScalarTypeDefinition(node) => node.start,
            Node::ObjectTypeDefinition(node) => node.start,
            Node::InterfaceTypeDefinition(node) => node.start,
            Node::UnionTypeDefinition(node) => node.start,
            Node::EnumTypeDefinition(node) => node.start,
            Node::InputObjectTypeDefinition(node) => node.start,
            Node::DirectiveDefinition(node) => node.start,
            Node::FieldDefinition(node) => node.start,
            Node::InputValueDefinition(node) => node.start,
            Node::EnumValueDefinition(node) => node.start,
            Node::RootOperationTypeDefinition(node) => node.start,
            Node::SchemaExtension(node) => node.start,
            Node::ScalarTypeExtension(node) => node.start,
            Node::ObjectTypeExtension(node) => node.start,
            Node::InterfaceTypeExtension(node) => node.start,
            Node::UnionTypeExtension(node) => node.start,
            Node::EnumTypeExtension(node) => node.start,
            Node::InputObjectTypeExtension(node) => node.start,
            Node::Directive(node) => node.start,
            Node::Argument(node) => node.start,
            Node::VariableDefinition(node) => node.start,
            Node::TypeCondition(node) => node.start,
            Node::ExecutableDirectiveLocation(node) => node.start,
            Node::TypeSystemDirectiveLocation(node) => node.start,
        }
    }

    /// 1-based line of the node's first token within `source`.
    pub fn line(self, source: &str) -> usize {
        crate::scanner::line_at(source, self.start() as usize)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Operations and fragments.
    pub fn is_executable_definition(self) -> bool {
        matches!(self, Node::OperationDefinition(_) | Node::FragmentDefinition(_))
    }

    /// Schema, named type and directive definitions.
    pub fn is_type_system_definition(self) -> bool {
        matches!(
            self,
            Node::SchemaDefinition(_)
                | Node::ScalarTypeDefinition(_)
                | Node::ObjectTypeDefinition(_)
                | Node::InterfaceTypeDefinition(_)
                | Node::UnionTypeDefinition(_)
                | Node::EnumTypeDefinition(_)
                | Node::InputObjectTypeDefinition(_)
                | Node::DirectiveDefinition(_),
        )
    }

    /// `extend schema` and `extend <type>` definitions.
    pub fn is_type_system_extension(self) -> bool {
        matches!(
            self,
            Node::SchemaExtension(_)
                | Node::ScalarTypeExtension(_)
                | Node::ObjectTypeExtension(_)
                | Node::InterfaceTypeExtension(_)
                | Node::UnionTypeExtension(_)
                | Node::EnumTypeExtension(_)
                | Node::InputObjectTypeExtension(_),
        )
    }

    /// Any value literal or variable reference.
    pub fn is_value(self) -> bool {
        matches!(
            self,
            Node::Variable(_)
                | Node::IntValue(_)
                | Node::FloatValue(_)
                | Node::StringValue(_)
                | Node::BooleanValue(_)
                | Node::NullValue(_)
                | Node::EnumValue(_)
                | Node::ListValue(_)
                | Node::ObjectValue(_),
        )
    }

    pub fn as_field(self) -> Option<&'ast Field<'src>> {
        match self {
            Node::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_int_value(self) -> Option<&'ast IntValue<'src>> {
        match self {
            Node::IntValue(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_operation_definition(self) -> Option<&'ast OperationDefinition<'src>> {
        match self {
            Node::OperationDefinition(def) => Some(def),
            _ => None,
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Direct children in source order.
    pub fn children(self) -> Children<'ast, 'src> {
        let mut children = Children::new();
        match self {
            Node::Document(node) => {
                children.extend(node.definitions.iter().map(|child| child.as_node()));
            },
            Node::OperationDefinition(node) => {
                children.extend(node.variable_definitions.iter().map(|child| child.as_node()));
                children.extend(node.directives.iter().map(|child| child.as_node()));
                children.extend(node.selection_set.iter().map(|child| child.as_node()));
            },
            Node::FragmentDefinition(node) => {
                children.push(node.type_condition.as_node());
                children.extend(node.directives.iter().map(|child| child.as_node()));
                children.extend(node.selection_set.iter().map(|child| child.as_node()));
            },
            Node::Field(node) => {
                children.extend(node.arguments.iter().map(|child| child.as_node()));
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.selection_set {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::FragmentSpread(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
            },
            Node::InlineFragment(node) => {
                if let Some(child) = &node.type_condition {
                    children.push(child.as_node());
                }
                children.extend(node.directives.iter().map(|child| child.as_node()));
                children.extend(node.selection_set.iter().map(|child| child.as_node()));
            },
            Node::ListValue(node) => {
                children.extend(node.values.iter().map(|child| child.as_node()));
            },
            Node::ObjectValue(node) => {
                children.extend(node.fields.iter().map(|child| child.as_node()));
            },
            Node::ObjectField(node) => {
                children.push(node.value.as_node());
            },
            Node::ListType(node) => {
                children.push(node.inner.as_node());
            },
            Node::NotNullType(node) => {
                children.push(node.inner.as_node());
            },
            Node::SchemaDefinition(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
                children.extend(node.root_operation_types.iter().map(|child| child.as_node()));
            },
            Node::ScalarTypeDefinition(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
            },
            Node::ObjectTypeDefinition(node) => {
                children.extend(node.implements_interfaces.iter().map(|child| child.as_node()));
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.fields {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::InterfaceTypeDefinition(node) => {
                children.extend(node.implements_interfaces.iter().map(|child| child.as_node()));
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.fields {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::UnionTypeDefinition(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
                children.extend(node.member_types.iter().map(|child| child.as_node()));
            },
            Node::EnumTypeDefinition(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.values {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::InputObjectTypeDefinition(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.fields {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::DirectiveDefinition(node) => {
                children.extend(node.arguments.iter().map(|child| child.as_node()));
                children.extend(node.locations.iter().map(|child| child.as_node()));
            },
            Node::FieldDefinition(node) => {
                children.extend(node.arguments.iter().map(|child| child.as_node()));
                children.push(node.field_type.as_node());
                children.extend(node.directives.iter().map(|child| child.as_node()));
            },
            Node::InputValueDefinition(node) => {
                children.push(node.value_type.as_node());
                if let Some(child) = &node.default_value {
                    children.push(child.as_node());
                }
                children.extend(node.directives.iter().map(|child| child.as_node()));
            },
            Node::EnumValueDefinition(node) => {
                children.push(node.enum_value.as_node());
                children.extend(node.directives.iter().map(|child| child.as_node()));
            },
            Node::RootOperationTypeDefinition(node) => {
                children.push(node.named_type.as_node());
            },
            Node::SchemaExtension(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
                children.extend(node.root_operation_types.iter().map(|child| child.as_node()));
            },
            Node::ScalarTypeExtension(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
            },
            Node::ObjectTypeExtension(node) => {
                children.extend(node.implements_interfaces.iter().map(|child| child.as_node()));
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.fields {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::InterfaceTypeExtension(node) => {
                children.extend(node.implements_interfaces.iter().map(|child| child.as_node()));
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.fields {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::UnionTypeExtension(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
                children.extend(node.member_types.iter().map(|child| child.as_node()));
            },
            Node::EnumTypeExtension(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.values {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::InputObjectTypeExtension(node) => {
                children.extend(node.directives.iter().map(|child| child.as_node()));
                if let Some(list) = &node.fields {
                    children.extend(list.iter().map(|child| child.as_node()));
                }
            },
            Node::Directive(node) => {
                children.extend(node.arguments.iter().map(|child| child.as_node()));
            },
            Node::Argument(node) => {
                children.push(node.value.as_node());
            },
            Node::VariableDefinition(node) => {
                children.push(node.variable.as_node());
                children.push(node.var_type.as_node());
                if let Some(child) = &node.default_value {
                    children.push(child.as_node());
                }
                children.extend(node.directives.iter().map(|child| child.as_node()));
            },
            Node::TypeCondition(node) => {
                children.push(node.named_type.as_node());
            },
            Node::Variable(_)
            | Node::IntValue(_)
            | Node::FloatValue(_)
            | Node::StringValue(_)
            | Node::BooleanValue(_)
            | Node::NullValue(_)
            | Node::EnumValue(_)
            | Node::NamedType(_)
            | Node::ExecutableDirectiveLocation(_)
            | Node::TypeSystemDirectiveLocation(_) => {},
        }
        children
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn enumerate(self) -> Enumerate<'ast, 'src> {
        Enumerate {
            stack: vec![self],
        }
    }

    /// Calls the visitor method matching this node's kind.
    pub fn accept<V>(self, visitor: &mut V)
    where
        V: Visitor<'ast, 'src> + ?Sized,
    {
        match self {
            Node::Document(node) => visitor.visit_document(node),
            Node::OperationDefinition(node) => visitor.visit_operation_definition(node),
            Node::FragmentDefinition(node) => visitor.visit_fragment_definition(node),
            Node::Field(node) => visitor.visit_field(node),
            Node::FragmentSpread(node) => visitor.visit_fragment_spread(node),
            Node::InlineFragment(node) => visitor.visit_inline_fragment(node),
            Node::Variable(node) => visitor.visit_variable(node),
            Node::IntValue(node) => visitor.visit_int_value(node),
            Node::FloatValue(node) => visitor.visit_float_value(node),
            Node::StringValue(node) => visitor.visit_string_value(node),
            Node::BooleanValue(node) => visitor.visit_boolean_value(node),
            Node::NullValue(node) => visitor.visit_null_value(node),
            Node::EnumValue(node) => visitor.visit_enum_value(node),
            Node::ListValue(node) => visitor.visit_list_value(node),
            Node::ObjectValue(node) => visitor.visit_object_value(node),
            Node::ObjectField(node) => visitor.visit_object_field(node),
            Node::NamedType(node) => visitor.visit_named_type(node),
            Node::ListType(node) => visitor.visit_list_type(node),
            Node::NotNullType(node) => visitor.visit_not_null_type(node),
            Node::SchemaDefinition(node) => visitor.visit_schema_definition(node),
            Node::ScalarTypeDefinition(node) => visitor.visit_scalar_type_definition(node),
            Node::ObjectTypeDefinition(node) => visitor.visit_object_type_definition(node),
            Node::InterfaceTypeDefinition(node) => visitor.visit_interface_type_definition(node),
            Node::UnionTypeDefinition(node) => visitor.visit_union_type_definition(node),
            Node::EnumTypeDefinition(node) => visitor.visit_enum_type_definition(node),
            Node::InputObjectTypeDefinition(node) => {
                visitor.visit_input_object_type_definition(node)
            },
            Node::DirectiveDefinition(node) => visitor.visit_directive_definition(node),
            Node::FieldDefinition(node) => visitor.visit_field_definition(node),
            Node::InputValueDefinition(node) => visitor.visit_input_value_definition(node),
            Node::EnumValueDefinition(node) => visitor.visit_enum_value_definition(node),
            Node::RootOperationTypeDefinition(node) => {
                visitor.visit_root_operation_type_definition(node)
            },
            Node::SchemaExtension(node) => visitor.visit_schema_extension(node),
            Node::ScalarTypeExtension(node) => visitor.visit_scalar_type_extension(node),
            Node::ObjectTypeExtension(node) => visitor.visit_object_type_extension(node),
            Node::InterfaceTypeExtension(node) => visitor.visit_interface_type_extension(node),
            Node::UnionTypeExtension(node) => visitor.visit_union_type_extension(node),
            Node::EnumTypeExtension(node) => visitor.visit_enum_type_extension(node),
            Node::InputObjectTypeExtension(node) => visitor.visit_input_object_type_extension(node),
            Node::Directive(node) => visitor.visit_directive(node),
            Node::Argument(node) => visitor.visit_argument(node),
            Node::VariableDefinition(node) => visitor.visit_variable_definition(node),
            Node::TypeCondition(node) => visitor.visit_type_condition(node),
            Node::ExecutableDirectiveLocation(node) => {
                visitor.visit_executable_directive_location(node)
            },
            Node::TypeSystemDirectiveLocation(node) => {
                visitor.visit_type_system_directive_location(node)
            },
        }
    }

    /// Calls the fold method matching this node's kind.
    pub fn fold<F>(self, folder: &mut F, acc: F::Acc) -> F::Acc
    where
        F: Fold<'ast, 'src> + ?Sized,
    {
        match self {
            Node::Document(node) => folder.fold_document(node, acc),
            Node::OperationDefinition(node) => folder.fold_operation_definition(node, acc),
            Node::FragmentDefinition(node) => folder.fold_fragment_definition(node, acc),
            Node::Field(node) => folder.fold_field(node, acc),
            Node::FragmentSpread(node) => folder.fold_fragment_spread(node, acc),
            Node::InlineFragment(node) => folder.fold_inline_fragment(node, acc),
            Node::Variable(node) => folder.fold_variable(node, acc),
            Node::IntValue(node) => folder.fold_int_value(node, acc),
            Node::FloatValue(node) => folder.fold_float_value(node, acc),
            Node::StringValue(node) => folder.fold_string_value(node, acc),
            Node::BooleanValue(node) => folder.fold_boolean_value(node, acc),
            Node::NullValue(node) => folder.fold_null_value(node, acc),
            Node::EnumValue(node) => folder.fold_enum_value(node, acc),
            Node::ListValue(node) => folder.fold_list_value(node, acc),
            Node::ObjectValue(node) => folder.fold_object_value(node, acc),
            Node::ObjectField(node) => folder.fold_object_field(node, acc),
            Node::NamedType(node) => folder.fold_named_type(node, acc),
            Node::ListType(node) => folder.fold_list_type(node, acc),
            Node::NotNullType(node) => folder.fold_not_null_type(node, acc),
            Node::SchemaDefinition(node) => folder.fold_schema_definition(node, acc),
            Node::ScalarTypeDefinition(node) => folder.fold_scalar_type_definition(node, acc),
            Node::ObjectTypeDefinition(node) => folder.fold_object_type_definition(node, acc),
            Node::InterfaceTypeDefinition(node) => folder.fold_interface_type_definition(node, acc),
            Node::UnionTypeDefinition(node) => folder.fold_union_type_definition(node, acc),
            Node::EnumTypeDefinition(node) => folder.fold_enum_type_definition(node, acc),
            Node::InputObjectTypeDefinition(node) => {
                folder.fold_input_object_type_definition(node, acc)
            },
            Node::DirectiveDefinition(node) => folder.fold_directive_definition(node, acc),
            Node::FieldDefinition(node) => folder.fold_field_definition(node, acc),
            Node::InputValueDefinition(node) => folder.fold_input_value_definition(node, acc),
            Node::EnumValueDefinition(node) => folder.fold_enum_value_definition(node, acc),
            Node::RootOperationTypeDefinition(node) => {
                folder.fold_root_operation_type_definition(node, acc)
            },
            Node::SchemaExtension(node) => folder.fold_schema_extension(node, acc),
            Node::ScalarTypeExtension(node) => folder.fold_scalar_type_extension(node, acc),
            Node::ObjectTypeExtension(node) => folder.fold_object_type_extension(node, acc),
            Node::InterfaceTypeExtension(node) => folder.fold_interface_type_extension(node, acc),
            Node::UnionTypeExtension(node) => folder.fold_union_type_extension(node, acc),
            Node::EnumTypeExtension(node) => folder.fold_enum_type_extension(node, acc),
            Node::InputObjectTypeExtension(node) => {
                folder.fold_input_object_type_extension(node, acc)
            },
            Node::Directive(node) => folder.fold_directive(node, acc),
            Node::Argument(node) => folder.fold_argument(node, acc),
            Node::VariableDefinition(node) => folder.fold_variable_definition(node, acc),
            Node::TypeCondition(node) => folder.fold_type_condition(node, acc),
            Node::ExecutableDirectiveLocation(node) => {
                folder.fold_executable_directive_location(node, acc)
            },
            Node::TypeSystemDirectiveLocation(node) => {
                folder.fold_type_system_directive_location(node, acc)
            },
        }
    }
}

// =============================================================================
// Enumerate
// =============================================================================

/// Pre-order iterator returned by `enumerate()`.
///
/// Each call to `enumerate()` starts a fresh walk from its root.
#[derive(Clone, Debug)]
pub struct Enumerate<'ast, 'src> {
    stack: Vec<Node<'ast, 'src>>,
}

impl<'ast, 'src> Iterator for Enumerate<'ast, 'src> {
    type Item = Node<'ast, 'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}
