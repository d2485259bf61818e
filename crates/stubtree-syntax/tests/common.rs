//! Shared helpers for syntax tests.
#![allow(dead_code, unused_imports)]

pub use stubtree_syntax::ast::{AstNode, Declaration, Element};
pub use stubtree_syntax::fixture::{parse_fixture, render_fixture};
pub use stubtree_syntax::{SyntaxKind, SyntaxNode};

/// Parses a fixture, panicking on malformed input.
pub fn file(fixture: &str) -> SyntaxNode {
    parse_fixture(fixture).unwrap_or_else(|err| panic!("bad fixture: {err}"))
}

/// Every declaration in the file, in document order.
pub fn declarations(fixture: &str) -> Vec<Declaration> {
    file(fixture).descendants().filter_map(Declaration::cast).collect()
}

/// One line per declaration: kind, names, type and header clauses.
pub fn describe(fixture: &str) -> String {
    let mut output = String::new();
    for declaration in declarations(fixture) {
        output.push_str(&format!(
            "{} {:?}",
            declaration.element_type(),
            declaration.names()
        ));
        if let Some(type_ref) = declaration.type_ref() {
            output.push_str(&format!(" type={type_ref}"));
        }
        if let Some(base) = declaration.extends() {
            output.push_str(&format!(" extends={base}"));
        }
        let interfaces = declaration.implements();
        if !interfaces.is_empty() {
            output.push_str(&format!(" implements={interfaces:?}"));
        }
        let modifiers = declaration.modifiers();
        if !modifiers.is_empty() {
            output.push_str(&format!(" modifiers={:?}", modifiers.keywords()));
        }
        output.push('\n');
    }
    output
}
