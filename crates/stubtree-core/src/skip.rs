//! Subtree pruning rules.

use rustc_hash::FxHashSet;
use stubtree_syntax::SyntaxKind;

const BODY_OWNERS: &[SyntaxKind] = &[
    SyntaxKind::Program,
    SyntaxKind::Function,
    SyntaxKind::FunctionBlock,
    SyntaxKind::Method,
    SyntaxKind::Action,
    SyntaxKind::PropertyGet,
    SyntaxKind::PropertySet,
];

/// Set of (parent type, child type) pairs whose child subtree is skipped
/// entirely.
///
/// Skipping prunes the child and everything below it. Elements without an
/// element type never match a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipRules {
    pairs: FxHashSet<(SyntaxKind, SyntaxKind)>,
}

impl SkipRules {
    /// No pruning.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Prunes statement bodies of POUs, methods, actions and property
    /// accessors. Statements declare nothing, so only signatures get indexed.
    #[must_use]
    pub fn bodies() -> Self {
        let mut rules = Self::none();
        for &owner in BODY_OWNERS {
            rules.insert(owner, SyntaxKind::StmtList);
        }
        rules
    }

    /// Adds a rule, builder style.
    #[must_use]
    pub fn with(mut self, parent: SyntaxKind, child: SyntaxKind) -> Self {
        self.insert(parent, child);
        self
    }

    /// Adds a rule.
    pub fn insert(&mut self, parent: SyntaxKind, child: SyntaxKind) -> bool {
        self.pairs.insert((parent, child))
    }

    /// Adds every rule of `other`.
    pub fn extend(&mut self, other: &SkipRules) {
        self.pairs.extend(other.pairs.iter().copied());
    }

    /// Returns `true` if the child subtree is pruned.
    #[must_use]
    pub fn skips(&self, parent: Option<SyntaxKind>, child: Option<SyntaxKind>) -> bool {
        match (parent, child) {
            (Some(parent), Some(child)) => self.pairs.contains(&(parent, child)),
            _ => false,
        }
    }

    /// Returns `true` if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Rules sorted by parent, then child.
    #[must_use]
    pub fn pairs(&self) -> Vec<(SyntaxKind, SyntaxKind)> {
        let mut pairs: Vec<_> = self.pairs.iter().copied().collect();
        pairs.sort_unstable();
        pairs
    }
}
