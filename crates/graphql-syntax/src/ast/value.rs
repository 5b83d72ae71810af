use crate::ast::Node;
use crate::ast::ast_node::impl_ast_node;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

// =========================================================
// Value
// =========================================================

/// An input value: a literal, a variable reference, or a list/object of
/// values.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

impl<'src> Value<'src> {
    pub fn as_node<'ast>(&'ast self) -> Node<'ast, 'src> {
        match self {
            Value::Variable(value) => Node::Variable(value),
            Value::Int(value) => Node::IntValue(value),
            Value::Float(value) => Node::FloatValue(value),
            Value::String(value) => Node::StringValue(value),
            Value::Boolean(value) => Node::BooleanValue(value),
            Value::Null(value) => Node::NullValue(value),
            Value::Enum(value) => Node::EnumValue(value),
            Value::List(value) => Node::ListValue(value),
            Value::Object(value) => Node::ObjectValue(value),
        }
    }

    pub fn start(&self) -> u32 {
        self.as_node().start()
    }
}

// =========================================================
// Scalars
// =========================================================

/// `$name`, starting at the `$`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Variable<'src> {
    pub name: Cow<'src, str>,
    pub start: u32,
}

/// An integer literal, kept as its source text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IntValue<'src> {
    pub value: Cow<'src, str>,
    pub start: u32,
}

impl IntValue<'_> {
    pub fn as_i64(&self) -> Result<i64, ParseIntError> {
        self.value.parse()
    }
}

/// A float literal, kept as its source text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FloatValue<'src> {
    pub value: Cow<'src, str>,
    pub start: u32,
}

impl FloatValue<'_> {
    pub fn as_f64(&self) -> Result<f64, ParseFloatError> {
        self.value.parse()
    }
}

/// A decoded string literal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
    /// `true` when written as a `"""` block string.
    pub block: bool,
    pub start: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BooleanValue {
    pub value: bool,
    pub start: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NullValue {
    pub start: u32,
}

/// A bare name in value position, e.g. `RED`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumValue<'src> {
    pub value: Cow<'src, str>,
    pub start: u32,
}

// =========================================================
// Composites
// =========================================================

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub start: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub start: u32,
}

/// `name: value` inside an object literal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectField<'src> {
    pub name: Cow<'src, str>,
    pub value: Value<'src>,
    pub start: u32,
}

impl_ast_node!(
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
);
impl_ast_node!(no_lifetime: BooleanValue, NullValue);
