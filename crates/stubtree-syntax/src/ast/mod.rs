//! Typed layer over the untyped syntax tree.
//!
//! Each wrapper is a zero-cost view of a `SyntaxNode` of one kind, in the
//! style of `rust-analyzer`'s AST. `Declaration` groups the node kinds that
//! can carry a stub, and `Element` is the typed element view that stub
//! building walks when it wants declarations handed to it directly.

mod element;
mod nodes;

pub use element::Element;
pub use nodes::*;

use smol_str::SmolStr;

use crate::syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

/// A typed view of a syntax node.
pub trait AstNode: Sized {
    /// Returns `true` if nodes of `kind` can be viewed as `Self`.
    fn can_cast(kind: SyntaxKind) -> bool;

    /// Views `node` as `Self` if its kind matches.
    fn cast(node: SyntaxNode) -> Option<Self>;

    /// The underlying syntax node.
    fn syntax(&self) -> &SyntaxNode;
}

/// Visibility of a member, from its modifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `PUBLIC`
    Public,
    /// `PRIVATE`
    Private,
    /// `PROTECTED`
    Protected,
    /// `INTERNAL`
    Internal,
}

impl Visibility {
    /// The keyword spelling.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
            Self::Internal => "INTERNAL",
        }
    }
}

/// Modifiers collected from a `ModifierList`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Declared visibility, if any.
    pub visibility: Option<Visibility>,
    /// `ABSTRACT`
    pub is_abstract: bool,
    /// `FINAL`
    pub is_final: bool,
    /// `OVERRIDE`
    pub is_override: bool,
}

impl Modifiers {
    /// Returns `true` if no modifier is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Keyword spellings in a stable order.
    #[must_use]
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut keywords = Vec::new();
        if let Some(visibility) = self.visibility {
            keywords.push(visibility.keyword());
        }
        if self.is_abstract {
            keywords.push("ABSTRACT");
        }
        if self.is_final {
            keywords.push("FINAL");
        }
        if self.is_override {
            keywords.push("OVERRIDE");
        }
        keywords
    }
}

pub(crate) fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
}

pub(crate) fn children<N: AstNode>(parent: &SyntaxNode) -> impl Iterator<Item = N> {
    parent.children().filter_map(N::cast)
}

pub(crate) fn first_token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    parent
        .children_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|token| token.kind() == kind)
}

/// Text of `node` with leading and trailing trivia dropped and inner trivia
/// runs collapsed to one space: `ARRAY OF INT`, `Lib.Base`.
pub(crate) fn text_without_trivia(node: &SyntaxNode) -> Option<SmolStr> {
    let mut text = String::new();
    let mut gap = false;
    for token in node
        .descendants_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
    {
        if token.kind().is_trivia() {
            gap = !text.is_empty();
            continue;
        }
        if gap {
            text.push(' ');
            gap = false;
        }
        text.push_str(token.text());
    }
    if text.is_empty() {
        None
    } else {
        Some(SmolStr::new(text))
    }
}
