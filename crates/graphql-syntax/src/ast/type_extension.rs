use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::NamedType;
use crate::ast::Node;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;

/// An `extend` of a named type. Each variant mirrors the matching
/// [`TypeDefinition`](crate::ast::TypeDefinition) without a description.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum TypeExtension<'src> {
    Scalar(ScalarTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
}

impl<'src> TypeExtension<'src> {
    pub fn as_node<'ast>(&'ast self) -> Node<'ast, 'src> {
        match self {
            TypeExtension::Scalar(ext) => Node::ScalarTypeExtension(ext),
            TypeExtension::Object(ext) => Node::ObjectTypeExtension(ext),
            TypeExtension::Interface(ext) => Node::InterfaceTypeExtension(ext),
            TypeExtension::Union(ext) => Node::UnionTypeExtension(ext),
            TypeExtension::Enum(ext) => Node::EnumTypeExtension(ext),
            TypeExtension::InputObject(ext) => Node::InputObjectTypeExtension(ext),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
        }
    }
}

/// `extend scalar Name @directives`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScalarTypeExtension<'src> {
    pub name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub start: u32,
}

/// `extend type Name implements A @directives { fields }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectTypeExtension<'src> {
    pub name: Cow<'src, str>,
    pub implements_interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<Vec<FieldDefinition<'src>>>,
    pub start: u32,
}

/// `extend interface Name implements A @directives { fields }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InterfaceTypeExtension<'src> {
    pub name: Cow<'src, str>,
    pub implements_interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<Vec<FieldDefinition<'src>>>,
    pub start: u32,
}

/// `extend union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnionTypeExtension<'src> {
    pub name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub member_types: Vec<NamedType<'src>>,
    pub start: u32,
}

/// `extend enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumTypeExtension<'src> {
    pub name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub values: Option<Vec<EnumValueDefinition<'src>>>,
    pub start: u32,
}

/// `extend input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputObjectTypeExtension<'src> {
    pub name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<Vec<InputValueDefinition<'src>>>,
    pub start: u32,
}

impl_ast_node!(
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
);
