use rowan::NodeOrToken;
use text_size::TextRange;

use super::{AstNode, Declaration};
use crate::syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Typed view of a tree element.
///
/// Declarations carry their own element type. Other nodes report the kind of
/// their syntax node, and tokens, which have no composite node behind them,
/// report no element type at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    /// A node that can carry a stub.
    Declaration(Declaration),
    /// Any other composite node.
    Node(SyntaxNode),
    /// A leaf token.
    Token(SyntaxToken),
}

impl Element {
    /// The element type, if the element has one.
    #[must_use]
    pub fn element_type(&self) -> Option<SyntaxKind> {
        match self {
            Self::Declaration(declaration) => Some(declaration.element_type()),
            Self::Node(_) | Self::Token(_) => self.node().map(|node| node.kind()),
        }
    }

    /// The composite syntax node behind this element.
    #[must_use]
    pub fn node(&self) -> Option<SyntaxNode> {
        match self {
            Self::Declaration(declaration) => Some(declaration.syntax().clone()),
            Self::Node(node) => Some(node.clone()),
            Self::Token(_) => None,
        }
    }

    /// The declaration, if this element is one.
    #[must_use]
    pub fn declaration(&self) -> Option<&Declaration> {
        match self {
            Self::Declaration(declaration) => Some(declaration),
            _ => None,
        }
    }

    /// First child element, tokens included.
    #[must_use]
    pub fn first_child(&self) -> Option<Element> {
        let child = match self {
            Self::Declaration(declaration) => declaration.syntax().first_child_or_token(),
            Self::Node(node) => node.first_child_or_token(),
            Self::Token(_) => None,
        };
        child.map(Element::from)
    }

    /// Next sibling element, tokens included.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Element> {
        let sibling = match self {
            Self::Declaration(declaration) => declaration.syntax().next_sibling_or_token(),
            Self::Node(node) => node.next_sibling_or_token(),
            Self::Token(token) => token.next_sibling_or_token(),
        };
        sibling.map(Element::from)
    }

    /// Text range covered by the element.
    #[must_use]
    pub fn text_range(&self) -> TextRange {
        match self {
            Self::Declaration(declaration) => declaration.syntax().text_range(),
            Self::Node(node) => node.text_range(),
            Self::Token(token) => token.text_range(),
        }
    }
}

impl From<SyntaxNode> for Element {
    fn from(node: SyntaxNode) -> Self {
        if Declaration::can_cast(node.kind()) {
            if let Some(declaration) = Declaration::cast(node.clone()) {
                return Self::Declaration(declaration);
            }
        }
        Self::Node(node)
    }
}

impl From<SyntaxElement> for Element {
    fn from(element: SyntaxElement) -> Self {
        match element {
            NodeOrToken::Node(node) => Self::from(node),
            NodeOrToken::Token(token) => Self::Token(token),
        }
    }
}
