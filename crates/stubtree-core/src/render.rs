//! Text rendering of stub trees for tests and the CLI.

use std::fmt::Write;

use crate::stub::{StubRecord, StubTree};

/// Renders `tree` one stub per line, indented two spaces per level.
///
/// ```text
/// SourceFile
///   Class Motor EXTENDS Base IMPLEMENTS IDevice [PUBLIC FINAL]
///     Method Start : BOOL
/// ```
#[must_use]
pub fn render_stub_tree(tree: &StubTree) -> String {
    let mut out = String::new();
    for (id, depth) in tree.preorder(tree.root()) {
        out.push_str(&"  ".repeat(depth));
        render_record(&tree[id], &mut out);
        out.push('\n');
    }
    out
}

fn render_record(record: &StubRecord, out: &mut String) {
    let data = record.data();
    out.push_str(record.kind().name());
    if !data.names.is_empty() {
        let _ = write!(out, " {}", data.names.join(", "));
    }
    if let Some(type_ref) = &data.type_ref {
        let _ = write!(out, " : {type_ref}");
    }
    if let Some(base) = &data.extends {
        let _ = write!(out, " EXTENDS {base}");
    }
    if !data.implements.is_empty() {
        let _ = write!(out, " IMPLEMENTS {}", data.implements.join(", "));
    }
    if !data.modifiers.is_empty() {
        let _ = write!(out, " [{}]", data.modifiers.keywords().join(" "));
    }
}
