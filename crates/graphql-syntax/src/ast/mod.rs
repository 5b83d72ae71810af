//! AST types for parsed GraphQL documents.
//!
//! Every node type borrows names and literal text from the source via
//! [`Cow<'src, str>`](std::borrow::Cow) and records the byte offset of its
//! first token in a `start` field. Line numbers are derived from that
//! offset on demand with `line(source)`.
//!
//! Nodes implement [`AstNode`], which provides uniform access to their
//! position and the three traversal entry points: `enumerate()` (pre-order
//! iteration over [`Node`] references), `accept()` (the
//! [`Visitor`](crate::visit::Visitor) protocol) and `fold()` (the
//! [`Fold`](crate::fold::Fold) protocol).
//!
//! # Example
//!
//! ```rust
//! use graphql_syntax::ast::NodeKind;
//!
//! let doc = graphql_syntax::parse("query Q { hero { name } }").unwrap();
//! let kinds: Vec<NodeKind> = doc.enumerate().map(|node| node.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         NodeKind::Document,
//!         NodeKind::OperationDefinition,
//!         NodeKind::Field,
//!         NodeKind::Field,
//!     ],
//! );
//! ```

mod ast_node;
mod directive;
mod directive_definition;
mod document;
mod fragment_definition;
mod node;
mod operation_definition;
mod schema_definition;
mod selection;
mod type_annotation;
mod type_definition;
mod type_extension;
mod value;

pub use ast_node::AstNode;
pub use directive::Argument;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use directive_definition::EXECUTABLE_DIRECTIVE_LOCATIONS;
pub use directive_definition::ExecutableDirectiveLocation;
pub use directive_definition::TYPE_SYSTEM_DIRECTIVE_LOCATIONS;
pub use directive_definition::TypeSystemDirectiveLocation;
pub use document::Definition;
pub use document::Document;
pub use fragment_definition::FragmentDefinition;
pub use fragment_definition::TypeCondition;
pub use node::Children;
pub use node::Enumerate;
pub use node::Node;
pub use node::NodeKind;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationType;
pub use operation_definition::VariableDefinition;
pub use schema_definition::RootOperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use schema_definition::SchemaExtension;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NotNullType;
pub use type_annotation::Type;
pub use type_definition::EnumTypeDefinition;
pub use type_definition::EnumValueDefinition;
pub use type_definition::FieldDefinition;
pub use type_definition::InputObjectTypeDefinition;
pub use type_definition::InputValueDefinition;
pub use type_definition::InterfaceTypeDefinition;
pub use type_definition::ObjectTypeDefinition;
pub use type_definition::ScalarTypeDefinition;
pub use type_definition::TypeDefinition;
pub use type_definition::UnionTypeDefinition;
pub use type_extension::EnumTypeExtension;
pub use type_extension::InputObjectTypeExtension;
pub use type_extension::InterfaceTypeExtension;
pub use type_extension::ObjectTypeExtension;
pub use type_extension::ScalarTypeExtension;
pub use type_extension::TypeExtension;
pub use type_extension::UnionTypeExtension;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::NullValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::Variable;

#[cfg(test)]
mod tests;
