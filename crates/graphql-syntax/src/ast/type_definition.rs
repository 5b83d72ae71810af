use crate::ast::Directive;
use crate::ast::EnumValue;
use crate::ast::NamedType;
use crate::ast::Node;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;

// =========================================================
// TypeDefinition
// =========================================================

/// A named type definition in the type system.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    pub fn as_node<'ast>(&'ast self) -> Node<'ast, 'src> {
        match self {
            TypeDefinition::Scalar(def) => Node::ScalarTypeDefinition(def),
            TypeDefinition::Object(def) => Node::ObjectTypeDefinition(def),
            TypeDefinition::Interface(def) => Node::InterfaceTypeDefinition(def),
            TypeDefinition::Union(def) => Node::UnionTypeDefinition(def),
            TypeDefinition::Enum(def) => Node::EnumTypeDefinition(def),
            TypeDefinition::InputObject(def) => Node::InputObjectTypeDefinition(def),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Scalar(def) => def.description.as_deref(),
            TypeDefinition::Object(def) => def.description.as_deref(),
            TypeDefinition::Interface(def) => def.description.as_deref(),
            TypeDefinition::Union(def) => def.description.as_deref(),
            TypeDefinition::Enum(def) => def.description.as_deref(),
            TypeDefinition::InputObject(def) => def.description.as_deref(),
        }
    }
}

// =========================================================
// Type definitions
// =========================================================

/// `scalar Name @directives`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub start: u32,
}

/// `type Name implements A & B @directives { fields }`
///
/// `fields` is `None` when the braces are absent and `Some(vec![])` for an
/// explicit empty `{}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub implements_interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<Vec<FieldDefinition<'src>>>,
    pub start: u32,
}

/// `interface Name implements A @directives { fields }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub implements_interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<Vec<FieldDefinition<'src>>>,
    pub start: u32,
}

/// `union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub member_types: Vec<NamedType<'src>>,
    pub start: u32,
}

/// `enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub values: Option<Vec<EnumValueDefinition<'src>>>,
    pub start: u32,
}

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Option<Vec<InputValueDefinition<'src>>>,
    pub start: u32,
}

// =========================================================
// Members
// =========================================================

/// `"description" name(args): Type @directives` in an object or interface.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FieldDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: Type<'src>,
    pub directives: Vec<Directive<'src>>,
    pub start: u32,
}

/// An argument definition or an input object field:
/// `"description" name: Type = default @directives`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputValueDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub name: Cow<'src, str>,
    pub value_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub start: u32,
}

/// `"description" VALUE @directives` in an enum.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<Cow<'src, str>>,
    pub enum_value: EnumValue<'src>,
    pub directives: Vec<Directive<'src>>,
    pub start: u32,
}

impl_ast_node!(
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
);
