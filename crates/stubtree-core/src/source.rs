//! Tree representations the stub builder can walk.
//!
//! The builder is written once against [`StubSource`]. Two representations
//! implement it: the typed `ast::Element` view, where declarations carry
//! their own element type, and the raw `SyntaxElement`, where the element
//! type is the node kind and declarations are recovered by casting.

use stubtree_syntax::ast::{AstNode, Declaration, Element};
use stubtree_syntax::{SyntaxElement, SyntaxKind, SyntaxNode};
use text_size::TextRange;

/// A tree element as seen by the stub builder.
pub trait StubSource: Sized {
    /// Element type used for the registry lookup and the skip policy.
    /// `None` means the element has no type and never creates a stub.
    fn element_type(&self) -> Option<SyntaxKind>;

    /// The syntax node handed to `should_create_stub`.
    fn syntax(&self) -> Option<SyntaxNode>;

    /// The declaration a stub attaches to. `None` when this representation
    /// cannot hold a stub for the element.
    fn declaration(&self) -> Option<Declaration>;

    /// First child in document order.
    fn first_child(&self) -> Option<Self>;

    /// Next sibling in document order.
    fn next_sibling(&self) -> Option<Self>;

    /// Source range, used in diagnostics.
    fn text_range(&self) -> Option<TextRange> {
        None
    }
}

impl StubSource for Element {
    fn element_type(&self) -> Option<SyntaxKind> {
        Element::element_type(self)
    }

    fn syntax(&self) -> Option<SyntaxNode> {
        self.node()
    }

    fn declaration(&self) -> Option<Declaration> {
        Element::declaration(self).cloned()
    }

    fn first_child(&self) -> Option<Self> {
        Element::first_child(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        Element::next_sibling(self)
    }

    fn text_range(&self) -> Option<TextRange> {
        Some(Element::text_range(self))
    }
}

impl StubSource for SyntaxElement {
    fn element_type(&self) -> Option<SyntaxKind> {
        Some(self.kind())
    }

    fn syntax(&self) -> Option<SyntaxNode> {
        self.as_node().cloned()
    }

    fn declaration(&self) -> Option<Declaration> {
        self.as_node().cloned().and_then(Declaration::cast)
    }

    fn first_child(&self) -> Option<Self> {
        self.as_node()?.first_child_or_token()
    }

    fn next_sibling(&self) -> Option<Self> {
        self.next_sibling_or_token()
    }

    fn text_range(&self) -> Option<TextRange> {
        Some(SyntaxElement::text_range(self))
    }
}
