//! Stub tree construction.
//!
//! # Traversal
//!
//! The builder walks the syntax tree depth first, in document order. Every
//! element receives the stub of its nearest stub-creating ancestor as parent
//! and either passes it on to its own children or replaces it with a fresh
//! child stub.
//!
//! Source trees can nest very deeply (generated code, long expression
//! chains), so the walk keeps its state on an explicit heap stack instead of
//! the call stack. Each frame holds the next sibling still to visit, so the
//! stack grows with the depth of the tree and never with its width.

use std::sync::Arc;

use stubtree_syntax::ast::Element;
use stubtree_syntax::{SyntaxElement, SyntaxKind, SyntaxNode};
use tracing::{debug, error, warn};

use crate::config::StubConfig;
use crate::diagnostics::{DiagnosticCode, StubDiagnostic};
use crate::registry::StubTypeRegistry;
use crate::skip::SkipRules;
use crate::source::StubSource;
use crate::stub::{StubData, StubId, StubTree};

/// Builds stub trees for source files.
///
/// Every method except the build entry points is a hook with a default;
/// hosts override the hooks to change which stubs exist.
pub trait StubBuilder {
    /// Stub capabilities by element type.
    fn registry(&self) -> &StubTypeRegistry {
        StubTypeRegistry::global()
    }

    /// Data for the file-level root stub.
    fn create_file_stub(&self, file: &SyntaxNode) -> StubData {
        StubData {
            range: file.text_range(),
            ..StubData::default()
        }
    }

    /// Returns `true` to prune the whole subtree of a child of type `child`
    /// under a parent of type `parent`. The child itself is not visited.
    fn skip_child_subtree(&self, parent: Option<SyntaxKind>, child: Option<SyntaxKind>) -> bool {
        let _ = (parent, child);
        false
    }

    /// Depth below the file node whose nodes are still visited but whose
    /// children are not. `Some(0)` keeps only the file stub.
    fn max_depth(&self) -> Option<usize> {
        None
    }

    /// Builds the stub tree for `file`, walking the typed element view.
    fn build_stub_tree(&self, file: &SyntaxNode) -> StubBuild {
        let mut builder = StubTreeBuilder::new(self, file);
        let root = builder.root();
        builder.build_subtree(Element::from(file.clone()), root);
        builder.finish()
    }

    /// Builds the stub tree for `file`, walking the raw syntax elements.
    fn build_stub_tree_raw(&self, file: &SyntaxNode) -> StubBuild {
        let mut builder = StubTreeBuilder::new(self, file);
        let root = builder.root();
        builder.build_subtree(SyntaxElement::from(file.clone()), root);
        builder.finish()
    }
}

/// The outcome of a build: the tree and what went wrong along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubBuild {
    tree: StubTree,
    diagnostics: Vec<StubDiagnostic>,
}

impl StubBuild {
    /// The stub tree.
    #[must_use]
    pub fn tree(&self) -> &StubTree {
        &self.tree
    }

    /// The root stub.
    #[must_use]
    pub fn root(&self) -> StubId {
        self.tree.root()
    }

    /// Diagnostics in traversal order.
    #[must_use]
    pub fn diagnostics(&self) -> &[StubDiagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any error diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(StubDiagnostic::is_error)
    }
}

struct Frame<S> {
    next: Option<S>,
    parent: StubId,
    parent_type: Option<SyntaxKind>,
    depth: usize,
}

/// One in-progress build.
///
/// [`StubBuilder::build_stub_tree`] covers whole files; this type is for
/// hosts that stitch subtrees from several sources under one root.
pub struct StubTreeBuilder<'a, B: StubBuilder + ?Sized> {
    builder: &'a B,
    tree: StubTree,
    diagnostics: Vec<StubDiagnostic>,
}

impl<'a, B: StubBuilder + ?Sized> StubTreeBuilder<'a, B> {
    /// Starts a build with the file stub of `file` as root.
    pub fn new(builder: &'a B, file: &SyntaxNode) -> Self {
        debug!(kind = %file.kind(), "building stub tree");
        let data = builder.create_file_stub(file);
        Self {
            builder,
            tree: StubTree::new(file.kind(), data),
            diagnostics: Vec::new(),
        }
    }

    /// The root stub.
    #[must_use]
    pub fn root(&self) -> StubId {
        self.tree.root()
    }

    /// The tree built so far.
    #[must_use]
    pub fn tree(&self) -> &StubTree {
        &self.tree
    }

    /// Builds stubs for `source` and its descendants under `parent`.
    ///
    /// Returns the stub that `source`'s children were attached to: a new
    /// stub for `source` if it created one, otherwise `parent`.
    pub fn build_subtree<S: StubSource>(&mut self, source: S, parent: StubId) -> StubId {
        let max_depth = self.builder.max_depth();
        let source_type = source.element_type();
        let current = self.visit(&source, source_type, parent);

        let mut stack = Vec::new();
        self.descend(&mut stack, &source, current, source_type, 0, max_depth);

        while let Some(frame) = stack.last_mut() {
            let Some(child) = frame.next.take() else {
                stack.pop();
                continue;
            };
            frame.next = child.next_sibling();
            let (parent, parent_type, depth) = (frame.parent, frame.parent_type, frame.depth);

            let child_type = child.element_type();
            if self.builder.skip_child_subtree(parent_type, child_type) {
                continue;
            }
            let child_stub = self.visit(&child, child_type, parent);
            self.descend(&mut stack, &child, child_stub, child_type, depth, max_depth);
        }

        current
    }

    /// Finishes the build.
    #[must_use]
    pub fn finish(self) -> StubBuild {
        debug!(
            stubs = self.tree.stub_count(),
            diagnostics = self.diagnostics.len(),
            "stub tree built"
        );
        StubBuild {
            tree: self.tree,
            diagnostics: self.diagnostics,
        }
    }

    /// Pushes a frame for the children of `source`, which sits at `depth`.
    fn descend<S: StubSource>(
        &mut self,
        stack: &mut Vec<Frame<S>>,
        source: &S,
        stub: StubId,
        source_type: Option<SyntaxKind>,
        depth: usize,
        max_depth: Option<usize>,
    ) {
        let Some(first) = source.first_child() else {
            return;
        };
        if let Some(max) = max_depth {
            if depth >= max {
                warn!(kind = ?source_type, max, "stub traversal depth limit reached");
                self.diagnostics.push(StubDiagnostic::new(
                    DiagnosticCode::DepthLimitExceeded,
                    format!("children below depth {max} were not indexed"),
                    source_type,
                    source.text_range(),
                ));
                return;
            }
        }
        stack.push(Frame {
            next: Some(first),
            parent: stub,
            parent_type: source_type,
            depth: depth + 1,
        });
    }

    /// Creates the stub for `source` if its element type asks for one and
    /// returns the stub its children attach to.
    fn visit<S: StubSource>(
        &mut self,
        source: &S,
        element_type: Option<SyntaxKind>,
        parent: StubId,
    ) -> StubId {
        let builder = self.builder;
        let Some(kind) = element_type else {
            return parent;
        };
        let Some(stub_type) = builder.registry().stub_type(kind) else {
            return parent;
        };
        let Some(node) = source.syntax() else {
            self.report_violation(source, kind, "has no syntax node");
            return parent;
        };
        if !stub_type.should_create_stub(&node) {
            return parent;
        }

        match source.declaration() {
            Some(declaration) => {
                let data = stub_type.create_stub(&declaration, &self.tree[parent]);
                self.tree.alloc(parent, kind, data)
            }
            None => {
                self.report_violation(source, kind, "is not a declaration");
                parent
            }
        }
    }

    /// Records a registered element that cannot hold a stub.
    fn report_violation<S: StubSource>(&mut self, source: &S, kind: SyntaxKind, reason: &str) {
        error!(kind = %kind, reason, "element cannot hold the stub it requests");
        self.diagnostics.push(StubDiagnostic::new(
            DiagnosticCode::ConsistencyViolation,
            format!("{kind} requests a stub but {reason}"),
            Some(kind),
            source.text_range(),
        ));
    }
}

/// Stub builder driven by a registry, skip rules and an optional depth cap.
#[derive(Debug, Clone, Default)]
pub struct DefaultStubBuilder {
    registry: Option<Arc<StubTypeRegistry>>,
    skip_rules: SkipRules,
    max_depth: Option<usize>,
}

impl DefaultStubBuilder {
    /// A builder using the global registry that never skips.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder configured from `stubtree.toml` settings.
    #[must_use]
    pub fn from_config(config: &StubConfig) -> Self {
        Self {
            registry: None,
            skip_rules: config.skip_rules.clone(),
            max_depth: config.max_depth,
        }
    }

    /// Uses `registry` instead of the global one.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<StubTypeRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Uses `skip_rules` to prune subtrees.
    #[must_use]
    pub fn with_skip_rules(mut self, skip_rules: SkipRules) -> Self {
        self.skip_rules = skip_rules;
        self
    }

    /// Stops descending below `max_depth`.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// The active skip rules.
    #[must_use]
    pub fn skip_rules(&self) -> &SkipRules {
        &self.skip_rules
    }
}

impl StubBuilder for DefaultStubBuilder {
    fn registry(&self) -> &StubTypeRegistry {
        match &self.registry {
            Some(registry) => registry.as_ref(),
            None => StubTypeRegistry::global(),
        }
    }

    fn skip_child_subtree(&self, parent: Option<SyntaxKind>, child: Option<SyntaxKind>) -> bool {
        self.skip_rules.skips(parent, child)
    }

    fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
