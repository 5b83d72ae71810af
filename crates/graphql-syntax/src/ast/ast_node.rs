use crate::ast::Enumerate;
use crate::ast::Node;
use crate::fold::Fold;
use crate::visit::Visitor;

/// Trait implemented by all AST node types.
///
/// All node types implement this trait via `#[inherent] impl AstNode`, so
/// every method is also callable without importing the trait. Generic code
/// (linters, printers, error reporters) can still take `impl AstNode`.
pub trait AstNode<'src> {
    /// Byte offset of the node's first token.
    fn start(&self) -> u32;

    /// 1-based line of the node's first token. Recomputed from `start` on
    /// every call.
    fn line(&self, source: &str) -> usize;

    /// This node as a borrowed [`Node`] for uniform dispatch.
    fn as_node<'ast>(&'ast self) -> Node<'ast, 'src>
    where
        'src: 'ast;

    /// Pre-order iterator over this node and all of its descendants.
    fn enumerate<'ast>(&'ast self) -> Enumerate<'ast, 'src>
    where
        'src: 'ast;

    /// Dispatches to the visitor method for this node's kind.
    fn accept<'ast, V>(&'ast self, visitor: &mut V)
    where
        'src: 'ast,
        V: Visitor<'ast, 'src> + ?Sized;

    /// Dispatches to the fold method for this node's kind, threading `acc`.
    fn fold<'ast, F>(&'ast self, folder: &mut F, acc: F::Acc) -> F::Acc
    where
        'src: 'ast,
        F: Fold<'ast, 'src> + ?Sized;
}

/// Implements [`AstNode`] for node structs whose [`Node`] variant has the
/// same name. Structs without a `'src` parameter are listed after
/// `no_lifetime:`.
macro_rules! impl_ast_node {
    (no_lifetime: $($ty:ident),+ $(,)?) => {
        $( $crate::ast::ast_node::impl_ast_node!(@impl $ty, $ty); )+
    };
    (@impl $variant:ident, $self_ty:ty) => {
        #[::inherent::inherent]
        impl<'src> $crate::ast::AstNode<'src> for $self_ty {
            pub fn start(&self) -> u32 {
                self.start
            }

            pub fn line(&self, source: &str) -> usize {
                $crate::scanner::line_at(source, self.start as usize)
            }

            pub fn as_node<'ast>(&'ast self) -> $crate::ast::Node<'ast, 'src>
            where
                'src: 'ast,
            {
                $crate::ast::Node::$variant(self)
            }

            pub fn enumerate<'ast>(&'ast self) -> $crate::ast::Enumerate<'ast, 'src>
            where
                'src: 'ast,
            {
                $crate::ast::Node::$variant(self).enumerate()
            }

            pub fn accept<'ast, V>(&'ast self, visitor: &mut V)
            where
                'src: 'ast,
                V: $crate::visit::Visitor<'ast, 'src> + ?Sized,
            {
                $crate::ast::Node::$variant(self).accept(visitor)
            }

            pub fn fold<'ast, F>(&'ast self, folder: &mut F, acc: F::Acc) -> F::Acc
            where
                'src: 'ast,
                F: $crate::fold::Fold<'ast, 'src> + ?Sized,
            {
                $crate::ast::Node::$variant(self).fold(folder, acc)
            }
        }
    };
    ($($ty:ident),+ $(,)?) => {
        $( $crate::ast::ast_node::impl_ast_node!(@impl $ty, $ty<'src>); )+
    };
}

pub(crate) use impl_ast_node;
