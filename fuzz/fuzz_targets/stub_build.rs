#![no_main]

use libfuzzer_sys::fuzz_target;
use stubtree_core::{DefaultStubBuilder, SkipRules, StubBuilder, StubTree};
use stubtree_syntax::syntax::SyntaxTreeBuilder;
use stubtree_syntax::{SyntaxKind, SyntaxNode};

const MAX_OPS: usize = 4096;
const MAX_DEPTH: usize = 64;

/// Decodes bytes into a tree: each byte opens a node, closes one or adds a
/// token, with the kind chosen by the byte's upper bits.
fn build_tree(data: &[u8]) -> SyntaxNode {
    let tokens: Vec<SyntaxKind> = SyntaxKind::all()
        .iter()
        .copied()
        .filter(|kind| kind.is_token())
        .collect();
    let nodes: Vec<SyntaxKind> = SyntaxKind::all()
        .iter()
        .copied()
        .filter(|kind| kind.is_node() && *kind != SyntaxKind::SourceFile)
        .collect();

    let mut builder = SyntaxTreeBuilder::new();
    builder.start_node(SyntaxKind::SourceFile.into());
    let mut depth = 1usize;
    for &byte in data.iter().take(MAX_OPS) {
        let pick = usize::from(byte >> 2);
        match byte & 0b11 {
            0 if depth > 1 => {
                builder.finish_node();
                depth -= 1;
            }
            1 => builder.token(tokens[pick % tokens.len()].into(), "x"),
            _ if depth < MAX_DEPTH => {
                builder.start_node(nodes[pick % nodes.len()].into());
                builder.token(SyntaxKind::Ident.into(), "n");
                depth += 1;
            }
            _ => {}
        }
    }
    while depth > 0 {
        builder.finish_node();
        depth -= 1;
    }
    SyntaxNode::new_root(builder.finish())
}

fn check_tree(tree: &StubTree) {
    for record in tree.records().skip(1) {
        let parent = record.parent().expect("only the root lacks a parent");
        assert!(parent < record.id());
        assert!(tree[parent].children().contains(&record.id()));
        assert!(tree[parent].data().range.contains_range(record.data().range));
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let root = build_tree(rest);

    let mut builder = DefaultStubBuilder::new();
    if selector & 1 == 1 {
        builder = builder.with_skip_rules(SkipRules::bodies());
    }
    if selector & 2 == 2 {
        builder = builder.with_max_depth(usize::from(selector >> 2));
    }

    let typed = builder.build_stub_tree(&root);
    let raw = builder.build_stub_tree_raw(&root);
    assert_eq!(typed, raw);
    check_tree(typed.tree());
});
