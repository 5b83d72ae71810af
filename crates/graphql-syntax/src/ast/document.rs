use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::Node;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::ast_node::impl_ast_node;

// =========================================================
// Document
// =========================================================

/// Root AST node for any GraphQL document.
///
/// A single document type holds executable definitions, type-system
/// definitions and type-system extensions side by side. Deciding which of
/// them a given consumer accepts is left to that consumer; the filtering
/// helpers below make the common cases short.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub start: u32,
}

impl<'src> Document<'src> {
    /// Operations and fragments, in source order.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions
            .iter()
            .filter(|def| def.is_executable_definition())
    }

    /// Schema, type and directive definitions, in source order.
    pub fn type_system_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions
            .iter()
            .filter(|def| def.is_type_system_definition())
    }

    /// `extend ...` definitions, in source order.
    pub fn type_system_extensions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions
            .iter()
            .filter(|def| def.is_type_system_extension())
    }
}

impl_ast_node!(Document);

// =========================================================
// Definition
// =========================================================

/// A top-level definition in a [`Document`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
    Schema(SchemaDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    Directive(DirectiveDefinition<'src>),
    Type(TypeDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
}

impl<'src> Definition<'src> {
    pub fn as_node<'ast>(&'ast self) -> Node<'ast, 'src> {
        match self {
            Definition::Operation(def) => Node::OperationDefinition(def),
            Definition::Fragment(def) => Node::FragmentDefinition(def),
            Definition::Schema(def) => Node::SchemaDefinition(def),
            Definition::SchemaExtension(ext) => Node::SchemaExtension(ext),
            Definition::Directive(def) => Node::DirectiveDefinition(def),
            Definition::Type(def) => def.as_node(),
            Definition::TypeExtension(ext) => ext.as_node(),
        }
    }

    pub fn start(&self) -> u32 {
        self.as_node().start()
    }

    pub fn is_executable_definition(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }

    pub fn is_type_system_definition(&self) -> bool {
        matches!(
            self,
            Definition::Schema(_) | Definition::Directive(_) | Definition::Type(_),
        )
    }

    pub fn is_type_system_extension(&self) -> bool {
        matches!(
            self,
            Definition::SchemaExtension(_) | Definition::TypeExtension(_),
        )
    }
}
