//! The stub tree arena.
//!
//! Records are stored in creation order, which is document order: a record
//! is always allocated after its parent, so the root is `StubId::ROOT` and
//! every parent id is smaller than its children's ids.

use std::ops::Index;

use serde::{Serialize, Serializer};
use smol_str::SmolStr;
use stubtree_syntax::ast::{Declaration, Modifiers};
use stubtree_syntax::SyntaxKind;
use text_size::TextRange;

/// Identifier of a record within one [`StubTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StubId(u32);

impl StubId {
    /// The file-level root record.
    pub const ROOT: StubId = StubId(0);

    /// Index of the record in creation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index data captured for one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StubData {
    /// Declared names; only variable declarations carry more than one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<SmolStr>,
    /// Declared or referenced type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<SmolStr>,
    /// Base type from `EXTENDS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<SmolStr>,
    /// Interfaces from `IMPLEMENTS`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<SmolStr>,
    /// Modifier keywords.
    #[serde(
        skip_serializing_if = "Modifiers::is_empty",
        serialize_with = "serialize_modifiers"
    )]
    pub modifiers: Modifiers,
    /// Source range of the declaration.
    #[serde(serialize_with = "serialize_range")]
    pub range: TextRange,
}

impl StubData {
    /// Captures everything a declaration exposes.
    #[must_use]
    pub fn from_declaration(declaration: &Declaration) -> Self {
        use stubtree_syntax::ast::AstNode;

        Self {
            names: declaration.names(),
            type_ref: declaration.type_ref(),
            extends: declaration.extends(),
            implements: declaration.implements(),
            modifiers: declaration.modifiers(),
            range: declaration.syntax().text_range(),
        }
    }

    /// The primary name.
    #[must_use]
    pub fn name(&self) -> Option<&SmolStr> {
        self.names.first()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_modifiers<S: Serializer>(modifiers: &Modifiers, serializer: S) -> Result<S::Ok, S::Error> {
    modifiers.keywords().serialize(serializer)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_range<S: Serializer>(range: &TextRange, serializer: S) -> Result<S::Ok, S::Error> {
    [u32::from(range.start()), u32::from(range.end())].serialize(serializer)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_kind<S: Serializer>(kind: &SyntaxKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.name())
}

/// One node of the stub tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubRecord {
    id: StubId,
    #[serde(serialize_with = "serialize_kind")]
    kind: SyntaxKind,
    parent: Option<StubId>,
    #[serde(skip)]
    children: Vec<StubId>,
    #[serde(flatten)]
    data: StubData,
}

impl StubRecord {
    /// This record's id.
    #[must_use]
    pub fn id(&self) -> StubId {
        self.id
    }

    /// Element type of the node the record was created for.
    #[must_use]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// Parent record; `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<StubId> {
        self.parent
    }

    /// Child records in document order.
    #[must_use]
    pub fn children(&self) -> &[StubId] {
        &self.children
    }

    /// Captured index data.
    #[must_use]
    pub fn data(&self) -> &StubData {
        &self.data
    }

    /// The primary name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&SmolStr> {
        self.data.name()
    }
}

/// A tree of stub records with a single file-level root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubTree {
    #[serde(rename = "stubs")]
    records: Vec<StubRecord>,
}

impl StubTree {
    /// Creates a tree holding only the root record.
    #[must_use]
    pub fn new(root_kind: SyntaxKind, root_data: StubData) -> Self {
        Self {
            records: vec![StubRecord {
                id: StubId::ROOT,
                kind: root_kind,
                parent: None,
                children: Vec::new(),
                data: root_data,
            }],
        }
    }

    /// Appends a record as the last child of `parent`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn alloc(&mut self, parent: StubId, kind: SyntaxKind, data: StubData) -> StubId {
        let id = StubId(self.records.len() as u32);
        self.records.push(StubRecord {
            id,
            kind,
            parent: Some(parent),
            children: Vec::new(),
            data,
        });
        self.records[parent.index()].children.push(id);
        id
    }

    /// The root record id.
    #[must_use]
    pub fn root(&self) -> StubId {
        StubId::ROOT
    }

    /// Looks up a record.
    #[must_use]
    pub fn get(&self, id: StubId) -> Option<&StubRecord> {
        self.records.get(id.index())
    }

    /// Number of records, root included.
    #[must_use]
    pub fn stub_count(&self) -> usize {
        self.records.len()
    }

    /// Parent of a record.
    #[must_use]
    pub fn parent(&self, id: StubId) -> Option<StubId> {
        self.get(id).and_then(StubRecord::parent)
    }

    /// Children of a record in document order.
    #[must_use]
    pub fn children(&self, id: StubId) -> &[StubId] {
        match self.get(id) {
            Some(record) => &record.children,
            None => &[],
        }
    }

    /// All records in creation order.
    pub fn records(&self) -> impl Iterator<Item = &StubRecord> {
        self.records.iter()
    }

    /// Strict ancestors of a record, nearest first.
    pub fn ancestors(&self, id: StubId) -> impl Iterator<Item = StubId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Depth-first pre-order walk from `start`, yielding each id with its
    /// depth relative to `start`.
    pub fn preorder(&self, start: StubId) -> impl Iterator<Item = (StubId, usize)> + '_ {
        let mut stack = vec![(start, 0usize)];
        std::iter::from_fn(move || {
            let (id, depth) = stack.pop()?;
            stack.extend(
                self.children(id)
                    .iter()
                    .rev()
                    .map(|&child| (child, depth + 1)),
            );
            Some((id, depth))
        })
    }

    /// Serializes the records as a flat JSON list.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Index<StubId> for StubTree {
    type Output = StubRecord;

    fn index(&self, id: StubId) -> &StubRecord {
        &self.records[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> StubData {
        StubData {
            names: vec![SmolStr::new(name)],
            ..StubData::default()
        }
    }

    fn sample() -> (StubTree, StubId, StubId, StubId) {
        let mut tree = StubTree::new(SyntaxKind::SourceFile, StubData::default());
        let class = tree.alloc(StubId::ROOT, SyntaxKind::Class, named("Motor"));
        let method = tree.alloc(class, SyntaxKind::Method, named("Start"));
        let program = tree.alloc(StubId::ROOT, SyntaxKind::Program, named("Main"));
        (tree, class, method, program)
    }

    #[test]
    fn test_alloc_links_parent_and_children() {
        let (tree, class, method, program) = sample();
        assert_eq!(tree.stub_count(), 4);
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.children(tree.root()), &[class, program]);
        assert_eq!(tree.parent(method), Some(class));
        assert_eq!(tree[method].name().map(SmolStr::as_str), Some("Start"));
        assert!(tree.get(StubId(99)).is_none());
        assert!(tree.children(StubId(99)).is_empty());
    }

    #[test]
    fn test_preorder_and_ancestors() {
        let (tree, class, method, program) = sample();
        let order: Vec<_> = tree.preorder(tree.root()).collect();
        assert_eq!(
            order,
            vec![(StubId::ROOT, 0), (class, 1), (method, 2), (program, 1)]
        );
        let ancestors: Vec<_> = tree.ancestors(method).collect();
        assert_eq!(ancestors, vec![class, StubId::ROOT]);
    }

    #[test]
    fn test_json_is_flat() {
        let (tree, ..) = sample();
        let json: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
        let stubs = json["stubs"].as_array().unwrap();
        assert_eq!(stubs.len(), 4);
        assert_eq!(stubs[0]["kind"], "SourceFile");
        assert_eq!(stubs[0]["parent"], serde_json::Value::Null);
        assert_eq!(stubs[2]["kind"], "Method");
        assert_eq!(stubs[2]["parent"], 1);
        assert_eq!(stubs[2]["names"][0], "Start");
        assert_eq!(stubs[2]["range"], serde_json::json!([0, 0]));
    }
}
