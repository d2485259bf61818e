//! Shared helpers for stub builder tests.
#![allow(dead_code, unused_imports)]

pub use stubtree_core::{
    render_stub_tree, DefaultStubBuilder, DiagnosticCode, SkipRules, StubBuild, StubBuilder,
    StubDiagnostic, StubId, StubSource, StubTree, StubTreeBuilder, StubTypeRegistry,
};
pub use stubtree_syntax::fixture::parse_fixture;
pub use stubtree_syntax::{SyntaxKind, SyntaxNode};

use stubtree_syntax::ast::Declaration;

/// A namespace with a type, an interface and a class, plus a program.
pub const PLANT: &str = include_str!("fixtures/plant.stree");

/// Parses a fixture, panicking on malformed input.
pub fn file(fixture: &str) -> SyntaxNode {
    parse_fixture(fixture).unwrap_or_else(|err| panic!("bad fixture: {err}"))
}

/// Builds `fixture` with the default builder and renders the stub tree.
pub fn snapshot_stubs(fixture: &str) -> String {
    snapshot_with(&DefaultStubBuilder::new(), fixture)
}

/// Builds `fixture` with `builder` and renders the stub tree followed by any
/// diagnostics.
pub fn snapshot_with(builder: &impl StubBuilder, fixture: &str) -> String {
    let build = builder.build_stub_tree(&file(fixture));
    let mut output = render_stub_tree(build.tree());
    if !build.diagnostics().is_empty() {
        output.push_str("---\n");
        for diagnostic in build.diagnostics() {
            output.push_str(&format!("{diagnostic}\n"));
        }
    }
    output
}

/// Parent kind of every non-root stub, as `(kind, parent kind)` pairs in
/// document order.
pub fn parent_kinds(tree: &StubTree) -> Vec<(SyntaxKind, SyntaxKind)> {
    tree.records()
        .filter_map(|record| {
            let parent = record.parent()?;
            Some((record.kind(), tree[parent].kind()))
        })
        .collect()
}

/// A straight chain of untyped-for-stubs elements, `len` levels deep.
///
/// No rowan tree is involved, so chains far deeper than the call stack could
/// recurse through can be walked and dropped.
#[derive(Debug, Clone, Copy)]
pub struct Chain {
    pub depth: usize,
    pub len: usize,
}

impl Chain {
    pub fn new(len: usize) -> Self {
        Self { depth: 0, len }
    }
}

impl StubSource for Chain {
    fn element_type(&self) -> Option<SyntaxKind> {
        Some(SyntaxKind::BinaryExpr)
    }

    fn syntax(&self) -> Option<SyntaxNode> {
        None
    }

    fn declaration(&self) -> Option<Declaration> {
        None
    }

    fn first_child(&self) -> Option<Self> {
        (self.depth + 1 < self.len).then_some(Self {
            depth: self.depth + 1,
            len: self.len,
        })
    }

    fn next_sibling(&self) -> Option<Self> {
        None
    }
}

/// `depth` namespaces nested inside each other, each named `N<level>`.
pub fn nested_namespaces(depth: usize) -> String {
    let mut fixture = String::from("SourceFile\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        fixture.push_str(&format!("{indent}Namespace\n"));
        fixture.push_str(&format!("{indent}  Name\n"));
        fixture.push_str(&format!("{indent}    Ident \"N{level}\"\n"));
    }
    fixture
}
